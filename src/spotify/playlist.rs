use crate::{
    Res, translator,
    types::Ref,
    utils::{self, TRACK_ITEMS},
};

use super::{CatalogClient, Link, LinkKind};

/// Lists the tracks of a playlist as browse entries.
///
/// Accepts `spotify:playlist:<id>` and `spotify:user:<owner>:playlist:<id>`.
/// Unplayable tracks are left out. A logged out client, a URI that is not a
/// playlist, or a playlist the catalog does not know all give an empty list.
///
/// # Example
///
/// ```
/// let refs = lookup_items(&client, "spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").await?;
/// for r in refs {
///     println!("{} {}", r.uri, r.name);
/// }
/// ```
pub async fn lookup_items(client: &dyn CatalogClient, uri: &str) -> Res<Vec<Ref>> {
    if !client.logged_in() {
        return Ok(Vec::new());
    }

    let link = match Link::from_uri(uri) {
        Ok(link) if link.kind == LinkKind::Playlist => link,
        Ok(link) => {
            tracing::info!("Failed to lookup {:?}: {} is not a playlist", uri, link.kind);
            return Ok(Vec::new());
        }
        Err(e) => {
            tracing::info!("Failed to lookup {:?}: {}", uri, e);
            return Ok(Vec::new());
        }
    };

    let Some(playlist) = client.get_playlist(&link).await? else {
        tracing::debug!("Playlist {:?} not found", link.uri);
        return Ok(Vec::new());
    };

    Ok(translator::to_track_refs(
        utils::items_at(&playlist, TRACK_ITEMS),
        true,
    ))
}
