//! Detail screens: project, work experience, advanced section, completion.

use super::escape_html;
use crate::catalog::ContentValue;
use crate::quest::Session;
use crate::quest::section::SectionId;

const BACK_BUTTON: &str = r#"<button class="mb-8 px-6 py-3 bg-slate-900/60 border border-slate-700/50 rounded-xl hover:border-slate-600" hx-post="/api/detail/exit" hx-swap="none">&#x2190; Back to Hub</button>"#;

fn chips(html: &mut String, items: &[String]) {
    html.push_str(r#"<div class="flex flex-wrap gap-2">"#);
    for item in items {
        html.push_str(&format!(
            r#"<span class="px-3 py-1 bg-slate-800/60 border border-slate-600/50 rounded-lg text-slate-300 text-sm">{}</span>"#,
            escape_html(item)
        ));
    }
    html.push_str(r#"</div>"#);
}

fn not_found(what: &str, id: &str) -> String {
    format!(
        r#"<span class="text-red-400">{} not found: {}</span>"#,
        what,
        escape_html(id)
    )
}

pub fn render_project(session: &Session, project_id: &str) -> String {
    let Some(project) = session.catalog().project(project_id) else {
        return not_found("Project", project_id);
    };
    let completed = session.progression().is_completed(project_id);

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="max-w-4xl mx-auto p-8">"#);
    html.push_str(BACK_BUTTON);
    html.push_str(&format!(
        r#"<h1 class="text-4xl font-bold text-slate-100">{}</h1>"#,
        escape_html(&project.title)
    ));
    if completed {
        html.push_str(r#"<p class="text-green-400 text-sm">&#x2714; Explored</p>"#);
    }
    html.push_str(&format!(
        r#"<p class="text-sm text-blue-300 mb-4">{}</p>"#,
        escape_html(&project.path_label)
    ));
    html.push_str(&format!(
        r#"<p class="text-slate-300 leading-relaxed mb-6">{}</p>"#,
        escape_html(&project.description)
    ));
    if !project.technologies.is_empty() {
        html.push_str(r#"<h3 class="text-lg font-semibold text-blue-400 mb-2">Tech Stack</h3>"#);
        chips(&mut html, &project.technologies);
    }

    html.push_str(r#"<div class="mt-6 flex gap-4">"#);
    if let Some(url) = &project.github_url {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-blue-400 hover:underline">GitHub</a>"#,
            escape_html(url)
        ));
    }
    if let Some(url) = &project.demo_url {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-blue-400 hover:underline">Live Demo</a>"#,
            escape_html(url)
        ));
    }
    html.push_str(r#"</div>"#);

    if !completed {
        html.push_str(
            r#"<div class="mt-8 text-center"><button class="px-8 py-4 bg-green-600 hover:bg-green-500 rounded-lg text-white font-semibold" hx-post="/api/detail/exit" hx-swap="none">Mark as Explored</button></div>"#,
        );
    }
    html.push_str(r#"</div>"#);
    html
}

pub fn render_experience(session: &Session, experience_id: &str) -> String {
    let Some(exp) = session.catalog().experience(experience_id) else {
        return not_found("Experience", experience_id);
    };

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="max-w-4xl mx-auto p-8">"#);
    html.push_str(BACK_BUTTON);
    html.push_str(&format!(
        r#"<h1 class="text-4xl font-bold text-slate-100">{}</h1>"#,
        escape_html(&exp.title)
    ));
    html.push_str(&format!(
        r#"<p class="text-xl text-orange-300 mb-2">{}</p><p class="text-sm text-slate-400 mb-4">{}</p>"#,
        escape_html(&exp.company),
        escape_html(&exp.duration)
    ));
    html.push_str(&format!(
        r#"<p class="text-slate-300 leading-relaxed mb-6">{}</p>"#,
        escape_html(&exp.description)
    ));
    if !exp.achievements.is_empty() {
        html.push_str(r#"<h3 class="text-lg font-semibold text-orange-400 mb-2">Achievements</h3><ul class="list-disc pl-6 mb-6 text-slate-300">"#);
        for a in &exp.achievements {
            html.push_str(&format!("<li>{}</li>", escape_html(a)));
        }
        html.push_str(r#"</ul>"#);
    }
    if !exp.technologies.is_empty() {
        chips(&mut html, &exp.technologies);
    }
    html.push_str(r#"</div>"#);
    html
}

pub fn render_section(session: &Session, section: SectionId) -> String {
    let data = session.catalog().section(section);

    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="max-w-4xl mx-auto p-8">"#);
    html.push_str(BACK_BUTTON);
    html.push_str(r#"<div class="bg-slate-900/50 border border-slate-700/50 rounded-xl p-8">"#);
    html.push_str(&format!(
        r#"<h1 class="text-3xl font-bold text-slate-200 mb-2">{}</h1><p class="text-slate-400 mb-8">{}</p>"#,
        escape_html(&data.title),
        escape_html(&data.description)
    ));
    html.push_str(r#"<div class="space-y-6">"#);
    for entry in &data.content {
        match &entry.value {
            ContentValue::List(items) => {
                html.push_str(&format!(
                    r#"<div><h3 class="text-xl font-semibold text-blue-400 mb-3">{}</h3>"#,
                    escape_html(&entry.label)
                ));
                chips(&mut html, items);
                html.push_str(r#"</div>"#);
            }
            ContentValue::Text(text) => {
                html.push_str(&format!(
                    r#"<div class="flex flex-col sm:flex-row gap-2"><span class="text-blue-400 font-semibold min-w-32">{}:</span><span class="text-slate-300">{}</span></div>"#,
                    escape_html(&entry.label),
                    escape_html(text)
                ));
            }
        }
    }
    html.push_str(r#"</div></div></div>"#);
    html
}

pub fn render_completion() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="max-w-4xl mx-auto text-center p-8">"#);
    html.push_str(r#"<div class="text-8xl mb-6">&#x1F389;</div>"#);
    html.push_str(
        r#"<h1 class="text-6xl font-bold bg-gradient-to-r from-yellow-400 via-orange-500 to-red-500 bg-clip-text text-transparent mb-4">QUEST COMPLETE!</h1>"#,
    );
    html.push_str(r#"<p class="text-2xl text-slate-300 mb-6">Portfolio Mastery Achieved</p>"#);
    html.push_str(r#"<ul class="text-left inline-block text-slate-300 space-y-2 mb-8">"#);
    for line in [
        "All projects completed",
        "Skills Inventory accessed",
        "Research Archives unlocked",
        "Contact &amp; Resume revealed",
    ] {
        html.push_str(&format!("<li>&#x2705; {}</li>", line));
    }
    html.push_str(r#"</ul>"#);
    html.push_str(
        r#"<div><button class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-xl" hx-post="/api/completion/dismiss" hx-swap="none">Return to Portfolio Hub</button></div>"#,
    );
    html.push_str(r#"</div>"#);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn session() -> Session {
        Session::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn project_detail_shows_links_and_stack() {
        let html = render_project(&session(), "inventory360");
        assert!(html.contains("Inventory360"));
        assert!(html.contains("Live Demo"));
        assert!(html.contains("Zod"));
        assert!(html.contains("Mark as Explored"));
    }

    #[test]
    fn unknown_project_is_reported() {
        let html = render_project(&session(), "<nope>");
        assert!(html.contains("Project not found: &lt;nope&gt;"));
    }

    #[test]
    fn skills_render_as_chips() {
        let html = render_section(&session(), SectionId::Skills);
        assert!(html.contains("Programming Languages"));
        assert!(html.contains(">TypeScript<"));
    }

    #[test]
    fn contact_renders_key_values() {
        let html = render_section(&session(), SectionId::Contact);
        assert!(html.contains("Email:"));
        assert!(html.contains("Montreal, QC"));
    }

    #[test]
    fn completion_offers_dismiss() {
        assert!(render_completion().contains("/api/completion/dismiss"));
    }
}
