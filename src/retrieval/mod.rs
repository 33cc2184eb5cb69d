// Keyword context retrieval
//
// Scans the sales dataset for records whose text fields appear in a user
// question and collects them, in source order and without duplicates, for
// injection into the LLM prompt. Matching is deliberately coarse: plain
// case-insensitive substring checks, no tokenization, no ranking.

use serde::Serialize;

use crate::store::{Deal, SalesRep};

pub mod prompt;

pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};

/// A piece of retrieved data injected into the LLM prompt.
///
/// Serializes either as the bare rep object or as
/// `{"deal": ..., "salesRepName": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextItem {
    Rep(SalesRep),
    Deal {
        deal: Deal,
        #[serde(rename = "salesRepName")]
        sales_rep_name: String,
    },
}

/// Collect dataset records mentioned by the question.
///
/// A rep matches when its name, role, or region appears (case-insensitively)
/// as a substring of the question. A deal matches on its client name; a
/// matching deal pulls in both a `{deal, salesRepName}` pairing and the
/// owning rep. Each item appears at most once, equality by value.
///
/// A short role or region can match unrelated words; that is accepted.
pub fn retrieve_context(question: &str, reps: &[SalesRep]) -> Vec<ContextItem> {
    let mut context = Vec::new();
    if question.is_empty() {
        return context;
    }
    let question = question.to_lowercase();

    for rep in reps {
        let rep_item = ContextItem::Rep(rep.clone());

        if question.contains(&rep.name.to_lowercase())
            || question.contains(&rep.role.to_lowercase())
            || question.contains(&rep.region.to_lowercase())
        {
            if !context.contains(&rep_item) {
                context.push(rep_item.clone());
            }
        }

        for deal in &rep.deals {
            if question.contains(&deal.client.to_lowercase()) {
                let deal_item = ContextItem::Deal {
                    deal: deal.clone(),
                    sales_rep_name: rep.name.clone(),
                };
                if !context.contains(&deal_item) {
                    context.push(deal_item);
                }
                if !context.contains(&rep_item) {
                    context.push(rep_item.clone());
                }
            }
        }
    }

    context
}
