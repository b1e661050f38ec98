// src/page/services.rs

use tracing::{debug, warn};

use super::models::PageModel;
use crate::auth::{Identity, IdentityService};
use crate::common::ApiError;
use crate::favorites::FavoritesService;

pub struct PageService {
    identity: IdentityService,
    favorites: FavoritesService,
}

impl PageService {
    pub fn new(identity: IdentityService, favorites: FavoritesService) -> Self {
        Self {
            identity,
            favorites,
        }
    }

    /// Sync the caller, apply an optional `fav` toggle, then list favorites.
    ///
    /// Never fails: any error degrades to the anonymous page.
    pub async fn render_page(&self, caller: Option<&Identity>, fav: Option<&str>) -> PageModel {
        match self.try_render(caller, fav).await {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    error = %e,
                    transient = e.is_transient(),
                    "Page render failed, serving anonymous view"
                );
                PageModel::anonymous()
            }
        }
    }

    async fn try_render(
        &self,
        caller: Option<&Identity>,
        fav: Option<&str>,
    ) -> Result<PageModel, ApiError> {
        if caller.is_none() {
            return Ok(PageModel::anonymous());
        }

        let user_id = self.identity.sync_user(caller).await?;

        if let Some(quote_id) = fav.and_then(parse_quote_id) {
            let favorited = self.favorites.toggle_favorite(caller, quote_id).await?;
            debug!(user_id = %user_id, quote_id = quote_id, favorited = favorited, "Applied fav toggle");
        }

        let favorites = self.favorites.get_user_favorites(caller).await?;

        Ok(PageModel {
            user_id: Some(user_id),
            favorites,
            is_authenticated: true,
        })
    }
}

/// Parses the `fav` query value; anything but an integer is ignored
pub fn parse_quote_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
