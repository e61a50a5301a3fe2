use serde_json::{json, Value};

use crate::drill_engine::models::{
    DrillOutcome, DrillResult, Entry, Flashcard, QuizAnswer, QuizQuestion,
};

/// Full entry as the display layer expects it.
fn entry_json(e: &Entry) -> Value {
    json!({
        "id":      e.id,
        "type":    e.category.as_str(),
        "phrase":  e.phrase,
        "meaning": e.meaning,
        "example": e.example,
        "level":   e.level.as_str()
    })
}

/// Quiz option as shown before answering: the phrase only.
fn option_json(e: &Entry) -> Value {
    json!({ "id": e.id, "phrase": e.phrase })
}

/// Public view of a question. The answer key is left out.
pub fn question_payload(q: &QuizQuestion) -> Value {
    json!({
        "prompt":  q.prompt,
        "options": q.options.iter().map(option_json).collect::<Vec<_>>()
    })
}

/// Result of grading, with the entry to reveal.
///
/// The revealed entry is the one the user picked when it was among the
/// options, otherwise the correct one.
pub fn answer_payload(a: &QuizAnswer) -> Value {
    let revealed = a.chosen.as_ref().or(a.correct.as_ref()).map(entry_json);
    json!({
        "is_correct": a.is_correct,
        "correct_id": a.correct_id,
        "revealed":   revealed
    })
}

/// Front of a flashcard; the back is included once the card is revealed.
pub fn flashcard_json(card: &Flashcard) -> Value {
    let mut v = json!({
        "id":       card.entry.id,
        "front":    card.front(),
        "level":    card.entry.level.as_str(),
        "type":     card.entry.category.as_str(),
        "revealed": card.is_revealed()
    });
    if card.is_revealed() {
        v["back"] = json!({
            "meaning": card.entry.meaning,
            "example": card.entry.example
        });
    }
    v
}

/// Envelope for any drill result.
pub fn result_payload(r: &DrillResult) -> Value {
    let body = match &r.outcome {
        DrillOutcome::Browse { total, items } => json!({
            "total": total,
            "items": items.iter().map(entry_json).collect::<Vec<_>>()
        }),
        DrillOutcome::Random { picks } => json!({
            "picks": picks.iter().map(entry_json).collect::<Vec<_>>()
        }),
        DrillOutcome::Quiz { question } => question_payload(question),
        DrillOutcome::Flashcard { card } => flashcard_json(card),
    };

    json!({
        "drill_id":      r.drill_id,
        "mode":          r.mode.to_string(),
        "matched":       r.matched,
        "used_fallback": r.used_fallback,
        "drill":         body
    })
}
