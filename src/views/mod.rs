//! Server-rendered pages.
//!
//! Templates are compiled into the binary; `.html` names get HTML
//! auto-escaping from minijinja's default callback.

use std::sync::Arc;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("login.html", include_str!("../../templates/login.html")),
    (
        "bookstore_list.html",
        include_str!("../../templates/bookstore_list.html"),
    ),
    (
        "voca_books_list.html",
        include_str!("../../templates/voca_books_list.html"),
    ),
    ("voca_list.html", include_str!("../../templates/voca_list.html")),
];

#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<S: Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}
