//! Hub map: the avatar with five project spokes, progress dots, the
//! chronicles list, and the advanced section cards.

use super::{escape_html, hx_post};
use crate::catalog::{ContentValue, Project, Section};
use crate::quest::Session;
use crate::quest::direction::Direction;
use crate::quest::progression::Progression;

/// Tailwind position of a spoke around the avatar.
fn spoke_position(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "-top-32 left-1/2 -translate-x-1/2",
        Direction::East => "top-1/2 -translate-y-1/2 -right-32",
        Direction::South => "-bottom-32 left-1/2 -translate-x-1/2",
        Direction::West => "top-1/2 -translate-y-1/2 -left-32",
        Direction::Northeast => "-top-24 -right-24",
    }
}

fn project_classes(progression: &Progression, project: &Project) -> (&'static str, &'static str) {
    if progression.is_completed(&project.id) {
        ("border-green-500 bg-green-500/20 text-green-300", "&#x2714;")
    } else if progression.is_unlocked(&project.id) {
        ("border-blue-500 bg-blue-500/20 text-blue-300 hover:bg-blue-500/30", "&#x1F4CD;")
    } else {
        ("border-gray-600 bg-gray-800/20 text-gray-500", "&#x1F512;")
    }
}

/// Up to three content items for an unlocked card, plus the total item count.
fn section_preview(section: &Section) -> (Vec<&str>, usize) {
    let items: Vec<&str> = section
        .content
        .iter()
        .flat_map(|entry| match &entry.value {
            ContentValue::Text(text) => std::slice::from_ref(text),
            ContentValue::List(list) => list.as_slice(),
        })
        .map(String::as_str)
        .collect();
    let total = items.len();
    (items.into_iter().take(3).collect(), total)
}

pub fn render_hub(session: &Session) -> String {
    let catalog = session.catalog();
    let progression = session.progression();
    let mut html = String::with_capacity(8192);

    html.push_str(r#"<div class="flex flex-col items-center justify-center p-8">"#);

    // Avatar with project spokes
    html.push_str(r#"<div class="relative w-32 h-32 mb-16">"#);
    html.push_str(
        r#"<div class="absolute inset-0 bg-gradient-to-br from-purple-600 to-blue-600 rounded-full"></div>"#,
    );
    for project in catalog.projects() {
        let (variant, icon) = project_classes(progression, project);
        // Locked icons still post: the interpreter answers with the unlock hint.
        html.push_str(&format!(
            r#"<button class="absolute w-24 h-24 rounded-lg border-2 flex flex-col items-center justify-center cursor-pointer {} {}" {}>"#,
            spoke_position(project.direction),
            variant,
            hx_post("/api/project/open", &project.id)
        ));
        html.push_str(&format!(r#"<span class="text-xl">{}</span>"#, icon));
        html.push_str(&format!(
            r#"<span class="text-xs font-semibold">{}</span>"#,
            escape_html(&project.title)
        ));
        if progression.is_unlocked(&project.id) {
            html.push_str(&format!(
                r#"<span class="absolute -bottom-8 text-xs whitespace-nowrap px-2 py-1 bg-black/50 rounded">{}</span>"#,
                escape_html(&project.path_label)
            ));
        }
        html.push_str(r#"</button>"#);
    }
    html.push_str(r#"</div>"#);

    // Progress dots
    html.push_str(r#"<div class="mt-8 flex items-center gap-2 text-sm text-gray-400"><span>Progress:</span><div class="flex gap-1">"#);
    for project in catalog.projects() {
        let dot = if progression.is_completed(&project.id) {
            "bg-green-500 border-green-500"
        } else if progression.is_unlocked(&project.id) {
            "bg-blue-500 border-blue-500"
        } else {
            "bg-gray-700 border-gray-600"
        };
        html.push_str(&format!(r#"<div class="w-3 h-3 rounded-full border {}"></div>"#, dot));
    }
    html.push_str(&format!(
        r#"</div><span>{}/{}</span></div>"#,
        progression.completed_projects().len(),
        catalog.projects().len()
    ));

    // Chronicles appear once Tier 1 is done.
    if progression.all_projects_completed(catalog) && !catalog.experiences().is_empty() {
        html.push_str(r#"<div class="mt-8 w-full max-w-2xl"><p class="text-orange-300 font-semibold mb-2">Chronicles</p><div class="grid grid-cols-1 md:grid-cols-2 gap-2">"#);
        for exp in catalog.experiences() {
            let seen = if progression.is_viewed(&exp.id) {
                r#"<span class="text-green-400">&#x2714;</span>"#
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<button class="text-left p-3 rounded-lg border border-orange-500/30 bg-orange-500/10 hover:bg-orange-500/20" {}><span class="font-semibold">{}</span> <span class="text-slate-400">{}</span> {}</button>"#,
                hx_post("/api/experience/open", &exp.id),
                escape_html(&exp.title),
                escape_html(&exp.company),
                seen
            ));
        }
        html.push_str(r#"</div></div>"#);
    }

    // Section cards
    html.push_str(r#"<div class="mt-8 grid grid-cols-2 md:grid-cols-4 gap-3 w-full max-w-3xl">"#);
    for section in catalog.sections() {
        let attrs = hx_post("/api/section/open", section.id.as_str());
        if !progression.is_section_unlocked(section.id) {
            html.push_str(&format!(
                r#"<button class="p-4 rounded-xl border border-slate-700/50 bg-slate-900/30 text-slate-500" {}><p class="font-semibold">{}</p><p class="text-xs italic">Locked</p></button>"#,
                attrs,
                escape_html(&section.title)
            ));
            continue;
        }
        let (preview, total) = section_preview(section);
        html.push_str(&format!(
            r#"<button class="p-4 rounded-xl border border-blue-500/50 bg-slate-900/60 text-slate-200" {}><p class="font-semibold">{}</p>"#,
            attrs,
            escape_html(&section.title)
        ));
        if total > 0 {
            html.push_str(&format!(r#"<p class="text-xs text-blue-400">{} items</p>"#, total));
            html.push_str(r#"<ul class="text-xs text-slate-400 truncate">"#);
            for item in preview {
                html.push_str(&format!(r#"<li>{}</li>"#, escape_html(item)));
            }
            html.push_str(r#"</ul>"#);
        } else {
            html.push_str(r#"<p class="text-xs text-blue-400">Available</p>"#);
        }
        html.push_str(r#"<p class="text-xs text-green-300">View</p></button>"#);
    }
    html.push_str(r#"</div>"#);

    html.push_str(r#"</div>"#);
    html
}
