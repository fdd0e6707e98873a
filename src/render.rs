//! HTML fragment rendering for in-place swap clients.
//!
//! The markup centers on a `#todo-list` container holding the item list,
//! the filter links and the active counter; mutations swap that container
//! (or a single `#todo-{id}` row) rather than reloading the page. Titles
//! are user input and are escaped before interpolation.

use crate::db::models::{Filter, Todo};

/// Escape text for interpolation into element content or double-quoted
/// attribute values.
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

/// One `<li>` row: checkbox posting the toggle, the title (double-click
/// to edit), a delete button.
pub fn todo_item(todo: &Todo) -> String {
    let checked = if todo.completed { " checked" } else { "" };
    let class = if todo.completed { "todo completed" } else { "todo" };
    format!(
        r##"<li id="todo-{id}" class="{class}">
  <input type="checkbox"{checked} hx-post="/todos/{id}/toggle" hx-target="#todo-list" hx-swap="outerHTML">
  <span hx-get="/todos/{id}/edit" hx-trigger="dblclick" hx-target="#todo-{id}" hx-swap="outerHTML">{title}</span>
  <button hx-delete="/todos/{id}" hx-target="#todo-list" hx-swap="outerHTML">&times;</button>
</li>"##,
        id = todo.id,
        class = class,
        checked = checked,
        title = escape(&todo.title),
    )
}

/// Edit form swapped in place of a single row; submitting patches the
/// title and swaps the updated row back.
pub fn todo_edit(todo: &Todo) -> String {
    format!(
        r##"<form id="todo-{id}" hx-patch="/todos/{id}" hx-target="#todo-{id}" hx-swap="outerHTML">
  <input type="text" name="title" value="{title}" autofocus>
</form>"##,
        id = todo.id,
        title = escape(&todo.title),
    )
}

/// The swappable `#todo-list` container: items, active counter, filter
/// links.
pub fn todo_list_content(todos: &[Todo], filter: Filter, active_count: i64) -> String {
    let mut out = String::from("<div id=\"todo-list\">\n<ul>\n");
    for todo in todos {
        out.push_str(&todo_item(todo));
        out.push('\n');
    }
    out.push_str("</ul>\n<footer>\n");
    out.push_str(&format!(
        "<span id=\"todo-count\">{active_count} items left</span>\n"
    ));
    out.push_str(&filter_links(filter));
    out.push_str("\n</footer>\n</div>");
    out
}

/// Full page shell for plain browser loads of `/`.
pub fn todo_page(todos: &[Todo], filter: Filter, active_count: i64) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>todos</title>\n\
         <script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>\n</head>\n<body>\n\
         <h1>todos</h1>\n\
         <form hx-post=\"/todos\" hx-target=\"#todo-list\" hx-swap=\"outerHTML\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"What needs doing?\" autofocus>\n\
         </form>\n\
         {content}\n\
         <form hx-post=\"/todos/completed\" hx-target=\"#todo-list\" hx-swap=\"outerHTML\">\n\
         <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\n\
         <button type=\"submit\">Clear completed</button>\n\
         </form>\n\
         </body>\n</html>",
        content = todo_list_content(todos, filter, active_count),
    )
}

fn filter_links(current: Filter) -> String {
    [Filter::All, Filter::Active, Filter::Completed]
        .iter()
        .map(|f| {
            let selected = if *f == current { " class=\"selected\"" } else { "" };
            format!(
                r#"<a href="/?filter={name}"{selected}>{name}</a>"#,
                name = f.as_str(),
                selected = selected,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
