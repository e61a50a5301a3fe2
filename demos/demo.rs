//! End-to-end tour of the drill engine.
//!
//! Run with: `cargo run --example demo`
//! (`RUST_LOG=debug` shows pool fallbacks and sampler retries.)
//!
//! 1. **Browse** — search the catalog and list matches.
//! 2. **Random** — five seeded picks from the phrasal verbs.
//! 3. **Quiz** — one question, answered wrong then right.
//! 4. **Flashcard** — front, then the flip.
//! 5. **Export** — the last picks as CSV text.
//! 6. **Fallback** — a search with no matches still produces a quiz.

use vocab_drill_gen::{
    client_adapter, export_selection, generate_drill, Catalog, Category, DrillMode,
    DrillOutcome, DrillRequest, Entry, FilterQuery,
};

fn print_entries(entries: &[Entry]) {
    for e in entries {
        println!("  {:>5}  {:<22} {:<3} {}", e.id, e.phrase, e.level, e.category);
        println!("         {}", e.meaning);
        println!("         \"{}\"", e.example);
    }
}

fn banner(title: &str) {
    println!();
    println!("══ {title} ══");
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let catalog = Catalog::builtin();

    // ── Browse ─────────────────────────────────────────────────────────────
    banner("Browse: search \"up\"");
    let browse = generate_drill(
        &catalog,
        &DrillRequest::new(DrillMode::Browse).with_filter(FilterQuery::search("up")),
    )?;
    if let DrillOutcome::Browse { total, items } = &browse.outcome {
        println!("  Results: {total} items");
        print_entries(items);
    }

    // ── Random ─────────────────────────────────────────────────────────────
    banner("Random: 5 phrasal verbs, seed 42");
    let random = generate_drill(
        &catalog,
        &DrillRequest::new(DrillMode::Random)
            .with_filter(FilterQuery::all().with_category(Category::PhrasalVerb))
            .with_seed(42),
    )?;
    let picks = match &random.outcome {
        DrillOutcome::Random { picks } => picks.clone(),
        _ => Vec::new(),
    };
    println!("  ID: {}  (picked {})", random.drill_id, picks.len());
    print_entries(&picks);

    // ── Quiz ───────────────────────────────────────────────────────────────
    banner("Quiz: seed 7");
    let quiz = generate_drill(&catalog, &DrillRequest::new(DrillMode::Quiz).with_seed(7))?;
    println!("{}", serde_json::to_string_pretty(&client_adapter::result_payload(&quiz))?);
    if let DrillOutcome::Quiz { question } = &quiz.outcome {
        if let Some(wrong) = question.options.iter().find(|o| o.id != question.correct_id) {
            let graded = question.grade(wrong.id);
            println!("  Picked \"{}\": correct = {}", wrong.phrase, graded.is_correct);
        }
        let graded = question.grade(question.correct_id);
        println!("  Picked the right one: correct = {}", graded.is_correct);
        println!("{}", serde_json::to_string_pretty(&client_adapter::answer_payload(&graded))?);
    }

    // ── Flashcard ──────────────────────────────────────────────────────────
    banner("Flashcard: idioms, seed 3");
    let card = generate_drill(
        &catalog,
        &DrillRequest::new(DrillMode::Flashcard)
            .with_filter(FilterQuery::all().with_category(Category::Idiom))
            .with_seed(3),
    )?;
    if let DrillOutcome::Flashcard { card } = card.outcome {
        let mut card = card;
        println!("  Front: {}  (Level: {} • Type: {})", card.front(), card.entry.level, card.entry.category);
        card.reveal();
        for line in card.back().lines() {
            println!("  Back:  {line}");
        }
    }

    // ── Export ─────────────────────────────────────────────────────────────
    banner("Export: last picks");
    println!("{}", export_selection(&picks, catalog.entries()));

    // ── Fallback ───────────────────────────────────────────────────────────
    banner("Fallback: search with no matches");
    let fallback = generate_drill(
        &catalog,
        &DrillRequest::new(DrillMode::Quiz)
            .with_filter(FilterQuery::search("xyzzy"))
            .with_seed(11),
    )?;
    println!(
        "  matched {} → used full catalog: {}",
        fallback.matched, fallback.used_fallback
    );

    Ok(())
}
