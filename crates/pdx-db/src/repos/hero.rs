//! Hero repository — CRUD, cascade delete, and association views.

use chrono::Utc;

use pdx_core::entities::{Hero, HeroPower, Power};
use pdx_core::views::HeroView;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::hero_power::row_to_hero_power;
use crate::repos::power::row_to_power;
use crate::service::PdxService;
use crate::updates::hero::HeroUpdate;

pub(crate) fn row_to_hero(row: &libsql::Row) -> Result<Hero, DatabaseError> {
    Ok(Hero {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        super_name: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PdxService {
    pub async fn create_hero(
        &self,
        name: &str,
        super_name: &str,
    ) -> Result<Hero, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO heroes (name, super_name, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![name, super_name, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::debug!(hero_id = id, "created hero");

        Ok(Hero {
            id,
            name: name.to_string(),
            super_name: super_name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_hero(&self, id: i64) -> Result<Hero, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, super_name, created_at, updated_at
                 FROM heroes WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_hero(&row)
    }

    pub async fn list_heroes(&self, limit: u32) -> Result<Vec<Hero>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT id, name, super_name, created_at, updated_at
                     FROM heroes ORDER BY id LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut heroes = Vec::new();
        while let Some(row) = rows.next().await? {
            heroes.push(row_to_hero(&row)?);
        }
        Ok(heroes)
    }

    pub async fn update_hero(
        &self,
        hero_id: i64,
        update: HeroUpdate,
    ) -> Result<Hero, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.as_str().into());
            idx += 1;
        }
        if let Some(ref super_name) = update.super_name {
            sets.push(format!("super_name = ?{idx}"));
            params.push(super_name.as_str().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_hero(hero_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        let now = Utc::now();
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(hero_id.into());
        let sql = format!("UPDATE heroes SET {} WHERE id = ?{idx}", sets.join(", "));

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_hero(hero_id).await
    }

    /// Delete a hero and all its join rows in one transaction.
    ///
    /// The associated powers survive; only the hero_powers rows referencing
    /// this hero are removed.
    pub async fn delete_hero(&self, hero_id: i64) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "DELETE FROM hero_powers WHERE hero_id = ?1",
            libsql::params![hero_id],
        )
        .await?;
        tx.execute("DELETE FROM heroes WHERE id = ?1", libsql::params![hero_id])
            .await?;
        tx.commit().await?;
        tracing::debug!(hero_id, "deleted hero and its join rows");
        Ok(())
    }

    /// Join rows for a hero, oldest first.
    pub async fn hero_powers_of(&self, hero_id: i64) -> Result<Vec<HeroPower>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, strength, hero_id, power_id, created_at, updated_at
                 FROM hero_powers WHERE hero_id = ?1 ORDER BY created_at, id",
                libsql::params![hero_id],
            )
            .await?;

        let mut hero_powers = Vec::new();
        while let Some(row) = rows.next().await? {
            hero_powers.push(row_to_hero_power(&row)?);
        }
        Ok(hero_powers)
    }

    /// Association view: the powers a hero holds, resolved through the join
    /// table. Replaces mediating hero_powers by hand.
    pub async fn powers_of_hero(&self, hero_id: i64) -> Result<Vec<Power>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, p.name, p.description, p.created_at, p.updated_at
                 FROM hero_powers hp
                 JOIN powers p ON p.id = hp.power_id
                 WHERE hp.hero_id = ?1
                 ORDER BY hp.created_at, hp.id",
                libsql::params![hero_id],
            )
            .await?;

        let mut powers = Vec::new();
        while let Some(row) = rows.next().await? {
            powers.push(row_to_power(&row)?);
        }
        Ok(powers)
    }

    /// Serialization projection for a hero: own fields plus the resolved
    /// powers, never the raw join rows.
    pub async fn hero_view(&self, hero_id: i64) -> Result<HeroView, DatabaseError> {
        let hero = self.get_hero(hero_id).await?;
        let powers = self.powers_of_hero(hero_id).await?;
        Ok(HeroView {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            powers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{seed_power, test_service};
    use crate::updates::hero::HeroUpdateBuilder;

    #[tokio::test]
    async fn create_hero_roundtrip() {
        let svc = test_service().await;

        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        assert_eq!(hero.name, "Kamala Khan");
        assert_eq!(hero.super_name, "Ms. Marvel");

        let fetched = svc.get_hero(hero.id).await.unwrap();
        assert_eq!(fetched.id, hero.id);
        assert_eq!(fetched.name, hero.name);
        assert_eq!(fetched.super_name, hero.super_name);
    }

    #[tokio::test]
    async fn get_missing_hero_is_no_result() {
        let svc = test_service().await;
        let result = svc.get_hero(42).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn update_hero_partial() {
        let svc = test_service().await;
        let hero = svc.create_hero("Jean Grey", "Marvel Girl").await.unwrap();

        let update = HeroUpdateBuilder::new().super_name("Phoenix").build();
        let updated = svc.update_hero(hero.id, update).await.unwrap();

        assert_eq!(updated.super_name, "Phoenix");
        assert_eq!(updated.name, "Jean Grey");
    }

    #[tokio::test]
    async fn empty_update_is_a_read() {
        let svc = test_service().await;
        let hero = svc.create_hero("Ororo Munroe", "Storm").await.unwrap();

        let updated = svc
            .update_hero(hero.id, HeroUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(updated.updated_at, hero.updated_at);
    }

    #[tokio::test]
    async fn list_heroes_ordered_by_id() {
        let svc = test_service().await;
        svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        svc.create_hero("Doreen Green", "Squirrel Girl").await.unwrap();

        let heroes = svc.list_heroes(10).await.unwrap();
        assert_eq!(heroes.len(), 2);
        assert!(heroes[0].id < heroes[1].id);
    }

    #[tokio::test]
    async fn delete_hero_cascades_to_join_rows_only() {
        let svc = test_service().await;
        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        let flight = seed_power(&svc, "Flight").await;
        let stretch = seed_power(&svc, "Elasticity").await;
        svc.create_hero_power("Strong", hero.id, flight.id)
            .await
            .unwrap();
        svc.create_hero_power("Average", hero.id, stretch.id)
            .await
            .unwrap();

        svc.delete_hero(hero.id).await.unwrap();

        assert!(matches!(
            svc.get_hero(hero.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(svc.hero_powers_of(hero.id).await.unwrap().is_empty());
        // The powers themselves survive
        assert_eq!(svc.get_power(flight.id).await.unwrap().id, flight.id);
        assert_eq!(svc.get_power(stretch.id).await.unwrap().id, stretch.id);
    }

    #[tokio::test]
    async fn powers_of_hero_resolves_join() {
        let svc = test_service().await;
        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        let power = seed_power(&svc, "Flight").await;
        svc.create_hero_power("Strong", hero.id, power.id)
            .await
            .unwrap();

        let powers = svc.powers_of_hero(hero.id).await.unwrap();
        assert_eq!(powers.len(), 1);
        assert_eq!(powers[0].name, "Flight");
    }

    #[tokio::test]
    async fn hero_view_exposes_powers_not_join_rows() {
        let svc = test_service().await;
        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        let power = seed_power(&svc, "Flight").await;
        svc.create_hero_power("Strong", hero.id, power.id)
            .await
            .unwrap();

        let view = svc.hero_view(hero.id).await.unwrap();
        assert_eq!(view.powers.len(), 1);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("hero_powers").is_none());
        assert_eq!(json["powers"][0]["name"], "Flight");
    }
}
