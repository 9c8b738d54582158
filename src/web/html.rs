//! HTML rendering for the web front end.
//!
//! Pages are plain strings built here; every piece of task text goes through
//! [`escape`] first.

use super::notice::Banner;
use crate::libs::task::{Task, ALL_CATEGORIES};
use std::fmt::Write;

/// Served at `/static/scripts.js`: flags due dates that are not `YYYY-MM-DD`
/// before the form is submitted.
pub const SCRIPTS_JS: &str = r#"document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('input[name="due_date"]').forEach(function (input) {
        input.addEventListener('input', function (event) {
            var value = event.target.value;
            if (value && !/^\d{4}-\d{2}-\d{2}$/.test(value)) {
                event.target.setCustomValidity('Please enter a date in YYYY-MM-DD format or leave empty.');
            } else {
                event.target.setCustomValidity('');
            }
        });
    });
});
"#;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto}\
table{border-collapse:collapse;width:100%}th,td{border-bottom:1px solid #ddd;padding:6px;text-align:left}\
.notice{padding:8px;margin-bottom:1em}.notice.success{background:#e6f4ea}.notice.error{background:#fce8e6}\
.completed{color:green}form.inline{display:inline}";

/// Values shown in the add/edit form.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub description: String,
    pub due_date: String,
    pub category: String,
}

impl From<&Task> for FormValues {
    fn from(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            due_date: task.due_date_str().to_string(),
            category: task.category_str().to_string(),
        }
    }
}

pub struct IndexPage<'a> {
    pub tasks: &'a [Task],
    pub categories: &'a [String],
    pub category_filter: &'a str,
    pub sort_by_due_date: bool,
    pub banner: Option<Banner>,
    pub form: FormValues,
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, banner: Option<&Banner>, body: &str) -> String {
    let banner = match banner {
        Some(banner) => format!(
            "<div class=\"notice {}\">{}</div>",
            if banner.is_error { "error" } else { "success" },
            escape(&banner.text)
        ),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n\
         <script src=\"/static/scripts.js\"></script>\n</head>\n<body>\n<h1>{title}</h1>\n{banner}\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn category_options(categories: &[String], selected: &str) -> String {
    let mut options = String::new();
    for category in categories {
        let _ = write!(
            options,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(category),
            if category == selected { " selected" } else { "" }
        );
    }
    options
}

fn task_fields(form: &FormValues, categories: &[String]) -> String {
    format!(
        "<label>Description <input type=\"text\" name=\"description\" value=\"{}\" required></label>\n\
         <label>Due date <input type=\"date\" name=\"due_date\" value=\"{}\" placeholder=\"YYYY-MM-DD\"></label>\n\
         <label>Category <select name=\"category\">{}</select></label>\n",
        escape(&form.description),
        escape(&form.due_date),
        category_options(categories, &form.category),
    )
}

pub fn index_page(page: &IndexPage<'_>) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/\">\n{}<button type=\"submit\">Add Task</button>\n</form>\n",
        task_fields(&page.form, page.categories)
    );

    let mut filters = vec![ALL_CATEGORIES.to_string()];
    filters.extend(page.categories.iter().cloned());
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/\">\n<label>Filter by category <select name=\"category\">{}</select></label>\n\
         <label><input type=\"checkbox\" name=\"sort\" value=\"true\"{}> Sort by due date</label>\n\
         <button type=\"submit\">Apply</button>\n</form>\n",
        category_options(&filters, page.category_filter),
        if page.sort_by_due_date { " checked" } else { "" }
    );

    if page.tasks.is_empty() {
        body.push_str("<p>No tasks yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>ID</th><th>Description</th><th>Status</th><th>Due Date</th><th>Category</th><th></th></tr>\n");
        for task in page.tasks {
            body.push_str(&task_row(task));
        }
        body.push_str("</table>\n");
    }

    layout("To-Do List", page.banner.as_ref(), &body)
}

fn task_row(task: &Task) -> String {
    let complete = if task.is_completed() {
        String::new()
    } else {
        format!(
            "<form class=\"inline\" method=\"post\" action=\"/complete/{}\"><button type=\"submit\">Complete</button></form>",
            task.id
        )
    };

    format!(
        "<tr><td>{id}</td><td>{description}</td><td class=\"{class}\">{status}</td><td>{due}</td><td>{category}</td><td>\
         {complete} <a href=\"/update/{id}\">Edit</a> \
         <form class=\"inline\" method=\"post\" action=\"/delete/{id}\" onsubmit=\"return confirm('Are you sure you want to delete this task?');\">\
         <button type=\"submit\">Delete</button></form></td></tr>\n",
        id = task.id,
        description = escape(&task.description),
        class = if task.is_completed() { "completed" } else { "pending" },
        status = task.status,
        due = escape(task.due_date_str()),
        category = escape(task.category_str()),
    )
}

pub fn update_page(id: i64, form: &FormValues, categories: &[String], banner: Option<&Banner>) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/update/{}\">\n{}<button type=\"submit\">Update Task</button>\n</form>\n<p><a href=\"/\">Back to list</a></p>\n",
        id,
        task_fields(form, categories)
    );

    layout("Update Task", banner, &body)
}
