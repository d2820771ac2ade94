//! Server-rendered HTML pages, compiled once from the embedded Tera templates.

use anyhow::Context as _;
use serde::Serialize;
use tera::{Context, Tera};

use crate::api::rest::dto::UserForm;
use crate::contract::error::FieldErrors;
use crate::contract::model::{Pet, User};

const LAYOUT: (&str, &str) = ("layout.html", include_str!("../../../templates/layout.html"));
const NEW_USER: (&str, &str) = (
    "users/new.html",
    include_str!("../../../templates/users/new.html"),
);
const SHOW_USER: (&str, &str) = (
    "users/show.html",
    include_str!("../../../templates/users/show.html"),
);

/// Value of the `notice` query parameter set after a successful create.
pub const NOTICE_CREATED: &str = "created";

/// Flash text shown for [`NOTICE_CREATED`].
pub const CREATED_MESSAGE: &str = "Horay!";

const UNNAMED_PET: &str = "(unnamed)";

/// Known notice keys only; anything else renders no notice.
pub fn notice_message(key: &str) -> Option<&'static str> {
    match key {
        NOTICE_CREATED => Some(CREATED_MESSAGE),
        _ => None,
    }
}

#[derive(Serialize)]
struct UserView<'a> {
    full_name: String,
    email: &'a str,
    happiness: i32,
}

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![LAYOUT, NEW_USER, SHOW_USER])
            .context("failed to compile view templates")?;
        Ok(Self { tera })
    }

    /// The creation form, optionally echoing a rejected submission.
    pub fn render_new(
        &self,
        form: &UserForm,
        errors: Option<&FieldErrors>,
    ) -> anyhow::Result<String> {
        let messages = errors.map(FieldErrors::full_messages).unwrap_or_default();
        let invalid_fields: Vec<&str> = errors
            .into_iter()
            .flat_map(|errs| errs.iter())
            .map(|e| e.field.as_str())
            .collect();

        let mut ctx = Context::new();
        ctx.insert("form", form);
        ctx.insert("errors", &messages);
        ctx.insert("invalid_fields", &invalid_fields);
        ctx.insert("notice", &None::<&str>);
        self.render(NEW_USER.0, &ctx)
    }

    pub fn render_show(
        &self,
        user: &User,
        pets: &[Pet],
        notice: Option<&str>,
    ) -> anyhow::Result<String> {
        let view = UserView {
            full_name: user.full_name(),
            email: &user.email,
            happiness: user.happiness,
        };
        let pet_names: Vec<&str> = pets
            .iter()
            .map(|p| p.name.as_deref().unwrap_or(UNNAMED_PET))
            .collect();

        let mut ctx = Context::new();
        ctx.insert("user", &view);
        ctx.insert("pets", &pet_names);
        ctx.insert("notice", &notice);
        self.render(SHOW_USER.0, &ctx)
    }

    fn render(&self, template: &str, ctx: &Context) -> anyhow::Result<String> {
        self.tera
            .render(template, ctx)
            .with_context(|| format!("failed to render {template}"))
    }
}
