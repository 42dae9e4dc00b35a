//! Standalone HTML page around the details table

use maud::{html, Markup, DOCTYPE};
use crate::{
    render::{render_pool_details, RenderOptions},
    types::{QuerySnapshot, QueryStatus},
};

fn status_caption(snapshot: &QuerySnapshot) -> String {
    let updated = snapshot
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    match (snapshot.status, updated) {
        (QueryStatus::Idle, _) => "No pool selected".to_string(),
        (QueryStatus::Pending, _) => format!("Loading {}", snapshot.address),
        (QueryStatus::Resolved, Some(at)) => format!("Updated {}", at),
        (QueryStatus::Resolved, None) => "Updated".to_string(),
        (QueryStatus::Failed, _) => format!("Could not load {}", snapshot.address),
    }
}

pub fn render_page(snapshot: &QuerySnapshot, opts: &RenderOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Pool Details" }
            }
            body {
                main class="container mx-auto p-6" {
                    p class="text-sm opacity-70 mb-2" data-status=(format!("{:?}", snapshot.status).to_lowercase()) {
                        (status_caption(snapshot))
                    }
                    (render_pool_details(snapshot.data.as_ref(), opts))
                }
            }
        }
    }
}
