//! HeroPower repository — join-row CRUD with strength validation.

use chrono::Utc;

use pdx_core::entities::HeroPower;
use pdx_core::enums::Strength;
use pdx_core::views::HeroPowerView;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_strength};
use crate::service::PdxService;
use crate::updates::hero_power::HeroPowerUpdate;

pub(crate) fn row_to_hero_power(row: &libsql::Row) -> Result<HeroPower, DatabaseError> {
    Ok(HeroPower {
        id: row.get::<i64>(0)?,
        strength: parse_strength(&row.get::<String>(1)?)?,
        hero_id: row.get::<i64>(2)?,
        power_id: row.get::<i64>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl PdxService {
    /// Associate a hero with a power.
    ///
    /// `strength` is parsed against the closed vocabulary before any SQL
    /// runs; a dangling `hero_id`/`power_id` is rejected by the store's
    /// foreign keys and surfaces as `DatabaseError::LibSql`.
    pub async fn create_hero_power(
        &self,
        strength: &str,
        hero_id: i64,
        power_id: i64,
    ) -> Result<HeroPower, DatabaseError> {
        let strength: Strength = strength.parse()?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO hero_powers (strength, hero_id, power_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    strength.as_str(),
                    hero_id,
                    power_id,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::debug!(hero_power_id = id, hero_id, power_id, "created hero power");

        Ok(HeroPower {
            id,
            strength,
            hero_id,
            power_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_hero_power(&self, id: i64) -> Result<HeroPower, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, strength, hero_id, power_id, created_at, updated_at
                 FROM hero_powers WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_hero_power(&row)
    }

    pub async fn update_hero_power(
        &self,
        hero_power_id: i64,
        update: HeroPowerUpdate,
    ) -> Result<HeroPower, DatabaseError> {
        let Some(ref raw) = update.strength else {
            return self.get_hero_power(hero_power_id).await;
        };
        // Validated before the UPDATE is built, so a bad value never lands.
        let strength: Strength = raw.parse()?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "UPDATE hero_powers SET strength = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![strength.as_str(), now.to_rfc3339(), hero_power_id],
            )
            .await?;

        self.get_hero_power(hero_power_id).await
    }

    pub async fn delete_hero_power(&self, hero_power_id: i64) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "DELETE FROM hero_powers WHERE id = ?1",
                libsql::params![hero_power_id],
            )
            .await?;
        tracing::debug!(hero_power_id, "deleted hero power");
        Ok(())
    }

    /// Serialization projection for a join row: both referenced entities
    /// inlined, neither carrying its own collections back.
    pub async fn hero_power_view(
        &self,
        hero_power_id: i64,
    ) -> Result<HeroPowerView, DatabaseError> {
        let hero_power = self.get_hero_power(hero_power_id).await?;
        let hero = self.get_hero(hero_power.hero_id).await?;
        let power = self.get_power(hero_power.power_id).await?;
        Ok(HeroPowerView {
            id: hero_power.id,
            strength: hero_power.strength,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            hero,
            power,
        })
    }
}
