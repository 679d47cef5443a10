use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{attraction::AttractionDto, favorite::FavoriteEntryDto},
    server::{
        data::{
            attraction::AttractionRepository, city::CityRepository, favorite::FavoriteRepository,
            user::UserRepository,
        },
        error::{content::ContentError, Error},
        model::db::CityModel,
    },
};

/// The state of the (user, attraction) pair after a toggle.
#[derive(Debug, PartialEq, Eq)]
pub enum FavoriteStatus {
    Favorited,
    Unfavorited,
}

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Favorites the attraction if no row exists for the pair, unfavorites it
    /// otherwise. Lookup and write run in one transaction, and the compound
    /// unique index on (user_id, attraction_id) rules out duplicate rows even
    /// under concurrent toggles.
    pub async fn toggle(
        &self,
        user_id: i32,
        attraction_id: i32,
    ) -> Result<FavoriteStatus, Error> {
        let txn = self.db.begin().await?;

        AttractionRepository::new(&txn)
            .get_by_id(attraction_id)
            .await?
            .ok_or(ContentError::AttractionNotFound(attraction_id))?;

        UserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(ContentError::UserNotFound(user_id))?;

        let repo = FavoriteRepository::new(&txn);

        let status = match repo.find_by_pair(user_id, attraction_id).await? {
            Some(favorite) => {
                repo.delete(favorite).await?;
                FavoriteStatus::Unfavorited
            }
            None => {
                repo.create(user_id, attraction_id).await?;
                FavoriteStatus::Favorited
            }
        };

        txn.commit().await?;

        Ok(status)
    }

    /// The user's favorited attractions with their cities, most recently
    /// favorited first.
    pub async fn list_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteEntryDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .list_with_attractions(user_id)
            .await?;

        let pairs: Vec<(entity::favorite::Model, entity::attraction::Model)> = favorites
            .into_iter()
            .filter_map(|(favorite, attraction)| attraction.map(|a| (favorite, a)))
            .collect();

        let city_ids: Vec<i32> = pairs.iter().map(|(_, attraction)| attraction.city_id).collect();
        let cities: HashMap<i32, CityModel> = CityRepository::new(self.db)
            .get_by_ids(city_ids)
            .await?
            .into_iter()
            .map(|city| (city.id, city))
            .collect();

        Ok(pairs
            .into_iter()
            .map(|(favorite, attraction)| {
                let city = cities.get(&attraction.city_id).cloned();

                FavoriteEntryDto {
                    favorited_at: favorite.created_at,
                    attraction: AttractionDto::from_model(attraction, city),
                }
            })
            .collect())
    }
}
