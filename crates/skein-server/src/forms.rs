//! Extractors for pattern uploads and post submissions.
//!
//! Patterns arrive either as `multipart/form-data` (the upload form) or as a
//! JSON body. File parts are skipped; only the text fields are stored.
//!
//! Posts always carry `author_id` in the query string. The post itself is
//! read from a form-encoded body, a JSON body, or the query string.

use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use skein_catalog::{Difficulty, NewPattern, NewPost, PatternCategory, PostCategory};
use skein_types::InvalidInput;

use crate::error::AppError;

/// Form fields that carry files rather than text.
const FILE_FIELDS: [&str; 2] = ["image", "pattern_file"];

/// A [`NewPattern`] read from a multipart form or a JSON body.
#[derive(Debug)]
pub(crate) struct PatternUpload(pub(crate) NewPattern);

fn has_content_type(req: &Request, mime: &str) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(mime))
}

impl<S> FromRequest<S> for PatternUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_content_type(&req, "multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            return read_form(multipart).await.map(Self);
        }

        let Json(new) = Json::<NewPattern>::from_request(req, state).await?;
        Ok(Self(new))
    }
}

async fn read_form(mut multipart: Multipart) -> Result<NewPattern, AppError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if field.file_name().is_some() || FILE_FIELDS.contains(&name.as_str()) {
            debug!(field = %name, "skipping uploaded file");
            continue;
        }
        let value = field.text().await?;
        fields.insert(name, value);
    }
    pattern_from_fields(fields)
}

fn pattern_from_fields(mut fields: HashMap<String, String>) -> Result<NewPattern, AppError> {
    let mut required = |name: &'static str| {
        fields
            .remove(name)
            .ok_or_else(|| AppError::from(InvalidInput::Blank(name)))
    };

    let title = required("title")?;
    let description = required("description")?;
    let difficulty: Difficulty = required("difficulty")?.parse()?;
    let category: PatternCategory = required("category")?.parse()?;
    let author_id = required("author_id")?;
    let author_id: u64 = author_id.trim().parse().map_err(|_| {
        AppError::BadRequest(format!("invalid author_id '{author_id}', expected a user id"))
    })?;

    let is_public = match fields.remove("is_public") {
        None => true,
        Some(value) => match value.trim().to_lowercase().as_str() {
            "" | "true" | "on" | "1" => true,
            "false" | "off" | "0" => false,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "invalid is_public '{value}', expected true or false"
                )));
            }
        },
    };

    Ok(NewPattern {
        title,
        description,
        difficulty,
        category,
        yarn_weight: fields.remove("yarn_weight"),
        needle_size: fields.remove("needle_size"),
        estimated_time: fields.remove("estimated_time"),
        author_id,
        is_public,
    })
}

/// A [`NewPost`] and the id of its author.
#[derive(Debug)]
pub(crate) struct PostSubmission {
    pub(crate) author_id: u64,
    pub(crate) post: NewPost,
}

#[derive(Debug, Deserialize)]
struct PostParams {
    author_id: u64,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
}

impl<S> FromRequest<S> for PostSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PostParams>::try_from_uri(req.uri())?;
        let author_id = params.author_id;

        let post = if has_content_type(&req, "application/x-www-form-urlencoded") {
            let Form(post) = Form::<NewPost>::from_request(req, state).await?;
            post
        } else if params.title.is_some() {
            post_from_params(params)?
        } else {
            let Json(post) = Json::<NewPost>::from_request(req, state).await?;
            post
        };

        Ok(Self { author_id, post })
    }
}

fn post_from_params(params: PostParams) -> Result<NewPost, AppError> {
    let category: PostCategory = params
        .category
        .ok_or(InvalidInput::Blank("category"))?
        .parse()?;
    Ok(NewPost {
        title: params.title.unwrap_or_default(),
        content: params.content.ok_or(InvalidInput::Blank("content"))?,
        category,
    })
}
