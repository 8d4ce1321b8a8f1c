use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Team, TeamPatch, Tournament};

pub struct TournamentRepository {
    pool: SqlitePool,
}

impl TournamentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn select_all(&self) -> Result<Vec<Tournament>, DatabaseError> {
        let rows = sqlx::query_as::<_, Tournament>("SELECT id, name FROM tournaments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<Tournament>, DatabaseError> {
        let row = sqlx::query_as::<_, Tournament>("SELECT id, name FROM tournaments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i64) -> Result<Tournament, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("tournament {}", id)))
    }

    /// Returns the store-assigned id. A duplicate name is a constraint error.
    pub async fn insert(&self, name: &str) -> Result<i64, DatabaseError> {
        let result = sqlx::query("INSERT INTO tournaments (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM tournaments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NothingDeleted(id));
        }
        Ok(())
    }
}

pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<Team>, DatabaseError> {
        let row = sqlx::query_as::<_, Team>("SELECT id, name, flag FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn select_404(&self, id: i64) -> Result<Team, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("team {}", id)))
    }

    pub async fn insert(&self, name: &str, flag: &str) -> Result<i64, DatabaseError> {
        let result = sqlx::query("INSERT INTO teams (name, flag) VALUES (?, ?)")
            .bind(name)
            .bind(flag)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Only the fields present in `patch` are written.
    pub async fn update(&self, id: i64, patch: &TeamPatch) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE teams SET name = COALESCE(?, name), flag = COALESCE(?, flag) WHERE id = ?",
        )
        .bind(patch.name.as_deref())
        .bind(patch.flag.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("team {}", id)));
        }
        Ok(())
    }
}
