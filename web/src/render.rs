//! Plain server-side HTML. Every value coming from a user or a remote service
//! goes through `escape`.

use draft_store::{DraftRecord, HistoryPage};
use std::fmt::Write;

use crate::drafting::{DraftError, DraftRequest};

fn escape(text: &str) -> String {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn value(v: &Option<String>) -> String {
    escape(v.as_deref().unwrap_or(""))
}

pub(crate) fn index_page(
    request: &DraftRequest,
    outcome: Option<&Result<DraftRecord, DraftError>>,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Email drafter</h1>\n<nav><a href=\"/history\">History</a></nav>\n");
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/\">\n\
         <label>Purpose <input name=\"purpose\" value=\"{}\"></label>\n\
         <label>Tone <input name=\"tone\" value=\"{}\"></label>\n\
         <label>Details <textarea name=\"details\">{}</textarea></label>\n\
         <button type=\"submit\">Generate</button>\n\
         </form>\n",
        value(&request.purpose),
        value(&request.tone),
        value(&request.details)
    );

    match outcome {
        Some(Ok(record)) => {
            let _ = writeln!(body, "<pre class=\"draft\">{}</pre>", escape(&record.draft));
        }
        Some(Err(e)) => {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(&e.to_string()));
        }
        None => {}
    }
    layout("Email drafter", &body)
}

pub(crate) fn history_page(page: &HistoryPage, notice: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Draft history</h1>\n<nav><a href=\"/\">New draft</a></nav>\n");
    if let Some(notice) = notice {
        let _ = writeln!(body, "<p class=\"notice\">{}</p>", escape(notice));
    }

    if page.records.is_empty() {
        body.push_str("<p>No drafts yet.</p>\n");
    }
    for record in &page.records {
        let _ = write!(
            body,
            "<article>\n\
             <h2>{}</h2>\n\
             <p>Tone: {}</p>\n\
             <p>{}</p>\n\
             <pre>{}</pre>\n\
             </article>\n",
            value(&record.purpose),
            value(&record.tone),
            value(&record.details),
            escape(&record.draft)
        );
    }

    body.push_str("<nav>\n");
    if page.has_prev {
        let _ = write!(
            body,
            "<a href=\"/history?page={}\" rel=\"prev\">Previous</a>\n",
            page.page - 1
        );
    }
    if page.has_next {
        let _ = write!(
            body,
            "<a href=\"/history?page={}\" rel=\"next\">Next</a>\n",
            page.page + 1
        );
    }
    body.push_str("</nav>\n");
    layout("Draft history", &body)
}
