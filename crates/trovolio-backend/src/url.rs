//! URL construction for the REST and storage surfaces.
//!
//! Pure functions so request shapes can be checked without a network.

use trovolio_core::SelectQuery;
use url::Url;

use crate::error::{ClientError, ClientResult};

const REST_PREFIX: &[&str] = &["rest", "v1"];
const STORAGE_PREFIX: &[&str] = &["storage", "v1"];

/// `Prefer` header asking the REST surface to merge on conflict.
pub const PREFER_MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=minimal";

/// `Prefer` header for writes whose response body is not needed.
pub const PREFER_RETURN_MINIMAL: &str = "return=minimal";

/// Append path segments to the base URL, percent-encoding each one.
fn with_segments<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> ClientResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| ClientError::Configuration {
            message: format!("base URL '{base}' cannot carry a path"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn rest_url(base: &Url, collection: &str) -> ClientResult<Url> {
    with_segments(base, REST_PREFIX.iter().copied().chain([collection]))
}

fn object_url(base: &Url, kind: &str, bucket: &str, path: &str) -> ClientResult<Url> {
    let segments = STORAGE_PREFIX
        .iter()
        .copied()
        .chain(["object", kind, bucket])
        .chain(path.split('/').filter(|s| !s.is_empty()));
    with_segments(base, segments)
}

/// `GET /rest/v1/{collection}?select=..&order=field.dir[&limit=N][&col=eq.value]`
pub fn build_select_url(base: &Url, query: &SelectQuery) -> ClientResult<Url> {
    let mut url = rest_url(base, &query.collection)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("select", &query.projection());
        pairs.append_pair(
            "order",
            &format!("{}.{}", query.order.field, query.order.direction.as_param()),
        );
        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        for filter in &query.filters {
            pairs.append_pair(&filter.column, &format!("eq.{}", filter.value));
        }
    }
    Ok(url)
}

/// `POST /rest/v1/{collection}?on_conflict={key}`
pub fn build_upsert_url(base: &Url, collection: &str, conflict_key: &str) -> ClientResult<Url> {
    let mut url = rest_url(base, collection)?;
    url.query_pairs_mut().append_pair("on_conflict", conflict_key);
    Ok(url)
}

/// `PATCH /rest/v1/{collection}?{key}=eq.{value}`
pub fn build_update_url(
    base: &Url,
    collection: &str,
    match_key: &str,
    match_value: &str,
) -> ClientResult<Url> {
    let mut url = rest_url(base, collection)?;
    url.query_pairs_mut()
        .append_pair(match_key, &format!("eq.{match_value}"));
    Ok(url)
}

/// `POST /storage/v1/object/sign/{bucket}/{path}`
pub fn build_sign_url(base: &Url, bucket: &str, path: &str) -> ClientResult<Url> {
    object_url(base, "sign", bucket, path)
}

/// `/storage/v1/object/public/{bucket}/{path}`
pub fn build_public_url(base: &Url, bucket: &str, path: &str) -> ClientResult<Url> {
    object_url(base, "public", bucket, path)
}

/// Resolve the `signedURL` returned by the signing endpoint.
///
/// The storage surface answers with a path relative to `/storage/v1`;
/// absolute URLs are taken as-is.
pub fn resolve_signed_url(base: &Url, signed: &str) -> ClientResult<Url> {
    if signed.starts_with("http://") || signed.starts_with("https://") {
        return Ok(Url::parse(signed)?);
    }

    let storage_root = with_segments(base, STORAGE_PREFIX.iter().copied())?;
    let root = format!("{}/", storage_root.as_str().trim_end_matches('/'));
    Ok(Url::parse(&root)?.join(signed.trim_start_matches('/'))?)
}
