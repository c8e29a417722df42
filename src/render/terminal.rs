//! Terminal panel: the command log, quick-command buttons, and input form.

use super::escape_html;
use crate::quest::Session;
use crate::quest::interpreter::suggested_commands;

pub fn render_terminal(session: &Session) -> String {
    let progression = session.progression();
    let mut html = String::with_capacity(4096);

    html.push_str(
        r#"<div class="h-full flex flex-col bg-slate-900/50 rounded-lg border border-slate-700/50">"#,
    );
    html.push_str(
        r#"<div class="flex items-center gap-2 p-3 border-b border-slate-700/50"><span class="text-slate-400 text-sm font-mono">terminal</span></div>"#,
    );

    // Log
    html.push_str(
        r#"<div id="quest-log" class="flex-1 p-4 overflow-y-auto text-sm font-mono space-y-1 min-h-0">"#,
    );
    let prefix = &session.catalog().settings().echo_prefix;
    for line in progression.log().lines() {
        let class = if !prefix.is_empty() && line.starts_with(prefix.as_str()) {
            "text-cyan-300"
        } else {
            "text-slate-300"
        };
        html.push_str(&format!(
            r#"<div class="{}">{}</div>"#,
            class,
            escape_html(line)
        ));
    }
    html.push_str(r#"</div>"#);

    // Quick commands
    html.push_str(r#"<div class="px-3 py-2 border-t border-slate-700/50 flex flex-wrap gap-1">"#);
    for cmd in suggested_commands(session.catalog(), progression) {
        html.push_str(&format!(
            r#"<button class="px-2 py-1 text-xs bg-slate-700/50 hover:bg-slate-600/50 rounded text-slate-300 hover:text-cyan-300" hx-post="/api/terminal" hx-vals='{{"command":"{cmd}"}}' hx-swap="none">{cmd}</button>"#,
        ));
    }
    html.push_str(r#"</div>"#);

    // Input
    html.push_str(
        r#"<form class="p-3 border-t border-slate-700/50 flex items-center gap-2" hx-post="/api/terminal" hx-swap="none" hx-on::after-request="this.reset()">"#,
    );
    html.push_str(r#"<span class="text-cyan-400 font-mono">$</span>"#);
    html.push_str(
        r#"<input type="text" name="command" autocomplete="off" placeholder="Enter command..." class="flex-1 bg-transparent text-slate-300 font-mono outline-none placeholder-slate-500" autofocus>"#,
    );
    html.push_str(r#"</form>"#);

    html.push_str(r#"</div>"#);
    html
}
