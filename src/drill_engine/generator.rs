use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::drill_engine::{
    catalog::Catalog,
    error::{DrillError, Result},
    filter,
    flashcard::draw_flashcard,
    helpers::pool_or_catalog,
    models::{DrillMode, DrillOutcome, DrillRequest, DrillResult, MAX_SAMPLE_COUNT},
    quiz::make_question,
    sampler::sample,
};

/// Most entries a browse view returns.
pub const BROWSE_LIMIT: usize = 50;

/// Generate a drill ID from mode + RNG.
fn make_drill_id(mode: DrillMode, rng: &mut impl RngCore) -> String {
    let prefix = match mode {
        DrillMode::Browse    => "BR",
        DrillMode::Random    => "RN",
        DrillMode::Quiz      => "QZ",
        DrillMode::Flashcard => "FC",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: filter the catalog, pick the pool, route to the mode.
pub fn generate_drill(catalog: &Catalog, request: &DrillRequest) -> Result<DrillResult> {
    if request.count == 0 {
        return Err(DrillError::InvalidCount(0));
    }
    let count = request.count.min(MAX_SAMPLE_COUNT);

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let drill_id = make_drill_id(request.mode, &mut rng);
    let filtered = filter::apply(catalog.entries(), &request.filter);
    let matched = filtered.len();

    // Browse shows the filtered view as-is; every other mode draws from a
    // pool that falls back to the full catalog.
    let (pool, fallback) = pool_or_catalog(&filtered, catalog.entries());
    let used_fallback = fallback && request.mode != DrillMode::Browse;
    if used_fallback {
        log::debug!(
            "{drill_id}: no entries matched {:?}, drawing from all {} entries",
            request.filter, catalog.len()
        );
    }

    let outcome = match request.mode {
        DrillMode::Browse => DrillOutcome::Browse {
            total: matched,
            items: filtered.iter().take(BROWSE_LIMIT).cloned().collect(),
        },
        DrillMode::Random    => DrillOutcome::Random { picks: sample(&mut rng, pool, count)? },
        DrillMode::Quiz      => DrillOutcome::Quiz { question: make_question(&mut rng, pool)? },
        DrillMode::Flashcard => DrillOutcome::Flashcard { card: draw_flashcard(&mut rng, pool)? },
    };

    Ok(DrillResult {
        drill_id,
        mode: request.mode,
        matched,
        used_fallback,
        outcome,
    })
}
