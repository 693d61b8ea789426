//! HTML rendering for the search page and its htmx fragments.
//!
//! Both collections live in the page as hidden JSON fields
//! (`#current-state`, `#accumulated-state`) that are posted back with every
//! action, so each fragment re-renders them from scratch.

use appscout_core::{AccumulatedCollection, AppRecord, SearchWorkflow, StatusMessage, WorkflowState};

/// Escape text for use in HTML content and double- or single-quoted
/// attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn state_json(records: &[AppRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

/// Inline message. No-match notices and failures get different classes.
pub fn message(message: &StatusMessage) -> String {
    let class = match message {
        StatusMessage::Notice(_) => "notice",
        StatusMessage::Error(_) => "error",
    };
    format!(
        r#"<div id="message" class="{}" role="status">{}</div>"#,
        class,
        escape(message.text())
    )
}

/// Content of `#search-output` after a search.
pub fn search_output(workflow: &SearchWorkflow) -> String {
    if workflow.state() == WorkflowState::PromptingContinue {
        return current_results(workflow.current());
    }
    workflow.message().map(message).unwrap_or_default()
}

/// Empties `#search-output` out of band, hiding the results and prompt.
pub fn clear_search_output() -> String {
    r#"<div id="search-output" hx-swap-oob="true"></div>"#.to_string()
}

fn current_results(records: &[AppRecord]) -> String {
    let rows: String = records
        .iter()
        .map(|record| format!("<tr>{}</tr>", record_cells(record)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<div id="results-container">
    <input type="hidden" id="current-state" name="current" value="{state}">
    <table id="results-table">
        <thead>
            <tr><th>App Name</th><th>App Store URL</th><th>App Bundle ID</th><th>Publisher</th></tr>
        </thead>
        <tbody id="results-body">
{rows}
        </tbody>
    </table>
    <div id="prompt">
        <p>Search for more apps?</p>
        <button type="button" id="prompt-yes"
            hx-post="/ui/accumulate" hx-target="#accumulated" hx-swap="outerHTML"
            hx-include="#current-state, #accumulated-state" hx-sync="#accumulated:drop"
            hx-vals='{{"finish": "false"}}'>Yes</button>
        <button type="button" id="prompt-no"
            hx-post="/ui/accumulate" hx-target="#accumulated" hx-swap="outerHTML"
            hx-include="#current-state, #accumulated-state" hx-sync="#accumulated:drop"
            hx-vals='{{"finish": "true"}}'>No</button>
    </div>
</div>"##,
        state = escape(&state_json(records)),
    )
}

fn record_cells(record: &AppRecord) -> String {
    format!(
        r#"<td>{}</td><td><a href="{url}" target="_blank" rel="noopener noreferrer" class="truncate">{url}</a></td><td>{}</td><td>{}</td>"#,
        escape(&record.app_name),
        escape(&record.bundle_id),
        escape(&record.publisher),
        url = escape(&record.app_store_url),
    )
}

/// The `#accumulated` section. Hidden, with no export control, when empty.
pub fn accumulated_section(collection: &AccumulatedCollection) -> String {
    let state = escape(&state_json(collection.records()));

    if collection.is_empty() {
        return format!(
            r#"<section id="accumulated" hidden>
    <input type="hidden" id="accumulated-state" name="accumulated" value="{state}">
</section>"#
        );
    }

    // Positions are baked into each remove button, so the whole table is
    // rebuilt on every change.
    let rows: String = collection
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                r##"<tr>{cells}<td><button type="button" class="remove"
                hx-post="/ui/remove/{index}" hx-target="#accumulated" hx-swap="outerHTML"
                hx-include="#accumulated-state" hx-sync="#accumulated:drop">Remove</button></td></tr>"##,
                cells = record_cells(record),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<section id="accumulated">
    <input type="hidden" id="accumulated-state" name="accumulated" value="{state}">
    <h2>Accumulated results (<span id="accumulated-count">{count}</span>)</h2>
    <table id="accumulated-table">
        <thead>
            <tr><th>App Name</th><th>App Store URL</th><th>App Bundle ID</th><th>Publisher</th><th></th></tr>
        </thead>
        <tbody id="accumulated-body">
{rows}
        </tbody>
    </table>
    <div class="actions">
        <form id="export-form" method="post" action="/ui/export">
            <input type="hidden" name="accumulated" value="{state}">
            <button type="submit" id="download-csv">Download CSV</button>
        </form>
        <button type="button" id="clear-all"
            hx-post="/ui/clear" hx-target="#accumulated" hx-swap="outerHTML"
            hx-include="#accumulated-state" hx-vals='{{"confirm": "true"}}'
            hx-confirm="Clear all accumulated results?">Clear all</button>
    </div>
</section>"##,
        count = collection.len(),
    )
}

/// The single page served for every non-API route.
pub fn index_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AppScout - iOS App Lookup</title>
    <link rel="stylesheet" href="/static/style.css">
    <script src="/static/htmx.min.js"></script>
    <script>window.htmx || document.write('<script src="https://unpkg.com/htmx.org@2.0.4"><\/script>')</script>
</head>
<body>
    <main id="app">
        <h1>iOS App Lookup</h1>

        <form id="search-form" hx-post="/ui/search" hx-target="#search-output"
            hx-indicator="#loading" hx-disabled-elt="#search-button">
            <input type="text" id="app-name" name="term" placeholder="Enter an app name" autofocus>
            <button type="submit" id="search-button">Search</button>
        </form>

        <div id="loading" class="htmx-indicator">Searching...</div>

        <div id="search-output"></div>

        {accumulated}
    </main>

    <script src="/static/app.js"></script>
</body>
</html>"##,
        accumulated = accumulated_section(&AccumulatedCollection::new()),
    )
}
