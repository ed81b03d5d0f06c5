//! Power repository — CRUD with description validation, cascade delete, and
//! association views.

use chrono::Utc;

use pdx_core::entities::{Hero, HeroPower, Power};
use pdx_core::validate::check_description;
use pdx_core::views::PowerView;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::hero::row_to_hero;
use crate::repos::hero_power::row_to_hero_power;
use crate::service::PdxService;
use crate::updates::power::PowerUpdate;

pub(crate) fn row_to_power(row: &libsql::Row) -> Result<Power, DatabaseError> {
    Ok(Power {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PdxService {
    /// Create a power. The description is validated before any SQL runs and
    /// stored verbatim once accepted.
    pub async fn create_power(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Power, DatabaseError> {
        check_description(description)?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO powers (name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![name, description, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::debug!(power_id = id, "created power");

        Ok(Power {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_power(&self, id: i64) -> Result<Power, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, description, created_at, updated_at
                 FROM powers WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_power(&row)
    }

    pub async fn list_powers(&self, limit: u32) -> Result<Vec<Power>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT id, name, description, created_at, updated_at
                     FROM powers ORDER BY id LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut powers = Vec::new();
        while let Some(row) = rows.next().await? {
            powers.push(row_to_power(&row)?);
        }
        Ok(powers)
    }

    pub async fn update_power(
        &self,
        power_id: i64,
        update: PowerUpdate,
    ) -> Result<Power, DatabaseError> {
        // Validate before building the statement, so a rejected description
        // leaves the row untouched.
        if let Some(ref description) = update.description {
            check_description(description)?;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.as_str().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.as_str().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_power(power_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        let now = Utc::now();
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(power_id.into());
        let sql = format!("UPDATE powers SET {} WHERE id = ?{idx}", sets.join(", "));

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_power(power_id).await
    }

    /// Delete a power and all its join rows in one transaction.
    ///
    /// The associated heroes survive; only the hero_powers rows referencing
    /// this power are removed.
    pub async fn delete_power(&self, power_id: i64) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "DELETE FROM hero_powers WHERE power_id = ?1",
            libsql::params![power_id],
        )
        .await?;
        tx.execute(
            "DELETE FROM powers WHERE id = ?1",
            libsql::params![power_id],
        )
        .await?;
        tx.commit().await?;
        tracing::debug!(power_id, "deleted power and its join rows");
        Ok(())
    }

    /// Join rows for a power, oldest first.
    pub async fn power_hero_powers_of(
        &self,
        power_id: i64,
    ) -> Result<Vec<HeroPower>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, strength, hero_id, power_id, created_at, updated_at
                 FROM hero_powers WHERE power_id = ?1 ORDER BY created_at, id",
                libsql::params![power_id],
            )
            .await?;

        let mut hero_powers = Vec::new();
        while let Some(row) = rows.next().await? {
            hero_powers.push(row_to_hero_power(&row)?);
        }
        Ok(hero_powers)
    }

    /// Association view: the heroes holding a power, resolved through the
    /// join table.
    pub async fn heroes_of_power(&self, power_id: i64) -> Result<Vec<Hero>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT h.id, h.name, h.super_name, h.created_at, h.updated_at
                 FROM hero_powers hp
                 JOIN heroes h ON h.id = hp.hero_id
                 WHERE hp.power_id = ?1
                 ORDER BY hp.created_at, hp.id",
                libsql::params![power_id],
            )
            .await?;

        let mut heroes = Vec::new();
        while let Some(row) = rows.next().await? {
            heroes.push(row_to_hero(&row)?);
        }
        Ok(heroes)
    }

    /// Serialization projection for a power: own fields plus the resolved
    /// heroes, never the raw join rows.
    pub async fn power_view(&self, power_id: i64) -> Result<PowerView, DatabaseError> {
        let power = self.get_power(power_id).await?;
        let heroes = self.heroes_of_power(power_id).await?;
        Ok(PowerView {
            id: power.id,
            name: power.name,
            description: power.description,
            heroes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use pdx_core::errors::ValidationError;

    use crate::test_support::helpers::test_service;
    use crate::updates::power::PowerUpdateBuilder;

    #[tokio::test]
    async fn create_power_roundtrip() {
        let svc = test_service().await;

        let power = svc
            .create_power("Flight", "Allows the holder to fly at will")
            .await
            .unwrap();
        assert_eq!(power.name, "Flight");
        assert_eq!(power.description, "Allows the holder to fly at will");

        let fetched = svc.get_power(power.id).await.unwrap();
        assert_eq!(fetched.description, power.description);
    }

    #[rstest]
    #[case("")]
    #[case("Too short")]
    #[case("exactly nineteen ch")]
    #[tokio::test]
    async fn create_power_rejects_short_description(#[case] description: &str) {
        let svc = test_service().await;

        let result = svc.create_power("X", description).await;
        assert!(matches!(
            result,
            Err(DatabaseError::Validation(ValidationError::Description))
        ));
        // Nothing was written
        assert!(svc.list_powers(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn boundary_description_is_accepted() {
        let svc = test_service().await;
        let power = svc
            .create_power("Haste", "exactly twenty chars")
            .await
            .unwrap();
        assert_eq!(power.description.chars().count(), 20);
    }

    #[tokio::test]
    async fn update_power_validates_description() {
        let svc = test_service().await;
        let power = svc
            .create_power("Flight", "Allows the holder to fly at will")
            .await
            .unwrap();

        let update = PowerUpdateBuilder::new().description("nope").build();
        let result = svc.update_power(power.id, update).await;
        assert!(matches!(
            result,
            Err(DatabaseError::Validation(ValidationError::Description))
        ));

        // The stored row is untouched
        let fetched = svc.get_power(power.id).await.unwrap();
        assert_eq!(fetched.description, "Allows the holder to fly at will");
    }

    #[tokio::test]
    async fn update_power_partial() {
        let svc = test_service().await;
        let power = svc
            .create_power("Flight", "Allows the holder to fly at will")
            .await
            .unwrap();

        let update = PowerUpdateBuilder::new().name("True Flight").build();
        let updated = svc.update_power(power.id, update).await.unwrap();

        assert_eq!(updated.name, "True Flight");
        assert_eq!(updated.description, "Allows the holder to fly at will");
    }

    #[tokio::test]
    async fn delete_power_cascades_to_join_rows_only() {
        let svc = test_service().await;
        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        let power = svc
            .create_power("Flight", "Allows the holder to fly at will")
            .await
            .unwrap();
        svc.create_hero_power("Strong", hero.id, power.id)
            .await
            .unwrap();
        assert_eq!(svc.power_hero_powers_of(power.id).await.unwrap().len(), 1);

        svc.delete_power(power.id).await.unwrap();

        assert!(matches!(
            svc.get_power(power.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(svc.power_hero_powers_of(power.id).await.unwrap().is_empty());
        assert!(svc.hero_powers_of(hero.id).await.unwrap().is_empty());
        // The hero survives
        assert_eq!(svc.get_hero(hero.id).await.unwrap().id, hero.id);
    }

    #[tokio::test]
    async fn power_view_exposes_heroes_not_join_rows() {
        let svc = test_service().await;
        let hero = svc.create_hero("Kamala Khan", "Ms. Marvel").await.unwrap();
        let power = svc
            .create_power("Flight", "Allows the holder to fly at will")
            .await
            .unwrap();
        svc.create_hero_power("Strong", hero.id, power.id)
            .await
            .unwrap();

        let view = svc.power_view(power.id).await.unwrap();
        assert_eq!(view.heroes.len(), 1);
        assert_eq!(view.heroes[0].super_name, "Ms. Marvel");

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("hero_powers").is_none());
    }
}
