//! Handlers for the `/points` resource.
//!
//! Registration arrives as a single multipart form: the text fields of the
//! collection point plus its photo under the `image` field. Validation
//! reports every violation in one 400; no file and no rows are written
//! until the whole payload has passed.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use coleta_core::error::CoreError;
use coleta_core::items::parse_item_filter;
use coleta_core::registration::{FieldViolation, PointRegistration, RawRegistration};
use coleta_core::types::DbId;
use coleta_core::upload::stored_filename;
use coleta_db::models::point::{CreatePoint, PointSearch};
use coleta_db::repositories::{ItemRepo, PointRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedPoint, PointDetail, PointView};
use crate::state::AppState;

/// Query parameters for `GET /points`.
///
/// All three act as filters and all three are needed for a match; an
/// absent parameter simply matches nothing.
#[derive(Debug, Deserialize)]
pub struct PointIndexParams {
    pub city: Option<String>,
    pub uf: Option<String>,
    /// Comma-separated item ids. Unparsable tokens are dropped.
    pub items: Option<String>,
}

/// POST /points
///
/// Register a collection point. Multipart field names match the SPA form:
/// `name`, `email`, `whatsapp`, `latitude`, `longitude`, `city`, `uf`,
/// `items` (comma-separated catalog ids), and the photo under `image`.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<CreatedPoint>> {
    let (raw, image) = read_registration_form(&mut multipart).await?;
    let (registration, filename, bytes) = validate_registration(raw, image)?;

    // Unknown catalog ids are a client error, caught before anything is
    // written. The FK constraint stays as the database-side backstop.
    let missing = ItemRepo::find_missing(&state.pool, &registration.items).await?;
    if !missing.is_empty() {
        let ids = missing
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::Validation(vec![FieldViolation::new(
            "items",
            format!("unknown item ids: {ids}"),
        )]));
    }

    // The photo lands before the transaction. Content-addressed names make
    // a leftover file from a failed insert harmless: a retry writes the
    // same name.
    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    tokio::fs::write(state.config.upload_dir.join(&filename), &bytes)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let PointRegistration {
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        uf,
        items,
    } = registration;
    let input = CreatePoint {
        image: filename,
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        uf,
    };
    let point = PointRepo::create_with_items(&state.pool, &input, &items).await?;

    tracing::info!(point_id = point.id, city = %point.city, uf = %point.uf, "Point registered");

    Ok(Json(CreatedPoint::from(point)))
}

/// GET /points
///
/// Search registered points by exact city, exact uf, and at least one
/// accepted item from the `items` filter. Deduplicated: a point matching
/// several of the filter's items appears once. An empty match is `[]`.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PointIndexParams>,
) -> AppResult<Json<Vec<PointView>>> {
    let search = PointSearch {
        city: params.city.unwrap_or_default(),
        uf: params.uf.unwrap_or_default(),
        item_ids: parse_item_filter(params.items.as_deref().unwrap_or_default()),
    };

    let points = PointRepo::search(&state.pool, &search).await?;

    let views = points
        .into_iter()
        .map(|point| PointView::from_point(point, &state.config.public_base_url))
        .collect();
    Ok(Json(views))
}

/// GET /points/{id}
///
/// One definitive response per request: the point with its accepted item
/// titles, or a single 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PointDetail>> {
    let point = PointRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Point", id }))?;

    let items = PointRepo::item_titles(&state.pool, id).await?;

    Ok(Json(PointDetail {
        point: PointView::from_point(point, &state.config.public_base_url),
        items,
    }))
}

// ---------------------------------------------------------------------------
// Multipart decoding and validation
// ---------------------------------------------------------------------------

/// Drain the multipart stream into raw registration fields plus the photo
/// (original filename and bytes). Unknown fields, extra file parts
/// included, are skipped without being read.
async fn read_registration_form(
    multipart: &mut Multipart,
) -> AppResult<(RawRegistration, Option<(String, Vec<u8>)>)> {
    let mut raw = RawRegistration::default();
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some((filename, data.to_vec()));
        } else if let Some(slot) = text_slot(&mut raw, &name) {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            *slot = Some(text);
        }
    }

    Ok((raw, image))
}

fn text_slot<'a>(raw: &'a mut RawRegistration, name: &str) -> Option<&'a mut Option<String>> {
    match name {
        "name" => Some(&mut raw.name),
        "email" => Some(&mut raw.email),
        "whatsapp" => Some(&mut raw.whatsapp),
        "latitude" => Some(&mut raw.latitude),
        "longitude" => Some(&mut raw.longitude),
        "city" => Some(&mut raw.city),
        "uf" => Some(&mut raw.uf),
        "items" => Some(&mut raw.items),
        _ => None,
    }
}

/// Run field validation and the photo checks together, so a rejected
/// registration carries the complete violation list in one response.
fn validate_registration(
    raw: RawRegistration,
    image: Option<(String, Vec<u8>)>,
) -> Result<(PointRegistration, String, Vec<u8>), AppError> {
    let parsed = raw.parse();
    let prepared = prepare_image(image);

    match (parsed, prepared) {
        (Ok(registration), Ok((filename, bytes))) => Ok((registration, filename, bytes)),
        (parsed, prepared) => {
            let mut violations = parsed.err().unwrap_or_default();
            if let Err(violation) = prepared {
                violations.push(violation);
            }
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            Err(AppError::Validation(violations))
        }
    }
}

/// Check the uploaded photo and derive its content-addressed filename.
fn prepare_image(image: Option<(String, Vec<u8>)>) -> Result<(String, Vec<u8>), FieldViolation> {
    let Some((original_name, bytes)) = image else {
        return Err(FieldViolation::new("image", "image file is required"));
    };
    match stored_filename(&original_name, &bytes) {
        Ok(filename) => Ok((filename, bytes)),
        Err(CoreError::Validation(message)) => Err(FieldViolation::new("image", message)),
        Err(other) => Err(FieldViolation::new("image", other.to_string())),
    }
}
