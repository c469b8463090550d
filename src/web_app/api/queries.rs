// web_app/api/queries.rs - Standard answer storage
//
// Plain async functions over a PgPool. Table names are unqualified so the
// connection's search_path decides the schema (tests run in their own).

use std::collections::{BTreeSet, HashMap};

use sqlx::{PgConnection, PgPool};
use thiserror::Error;

use crate::web_app::model::{
    StandardAnswer, StandardAnswerCategory, StandardAnswerRequest, StandardAnswerSeed,
    MAX_CATEGORY_NAME_LEN,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No standard answer with id {0}")]
    NotFound(i32),

    #[error("No standard answer category with id {0}")]
    CategoryNotFound(i32),

    #[error("Some or all categories with ids {0:?} do not exist")]
    UnknownCategories(Vec<i32>),

    #[error("Invalid category name: {0}")]
    InvalidCategoryName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Category names must fit the unique index; overly long names are rejected.
pub fn check_category_validity(name: &str) -> bool {
    if name.chars().count() > MAX_CATEGORY_NAME_LEN {
        tracing::error!("Category with name '{}' is too long, cannot be used", name);
        return false;
    }
    true
}

pub async fn count_standard_answers(pool: &PgPool) -> Result<i64, StoreError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM standard_answer")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// All answers ordered by id, each with its categories
pub async fn fetch_standard_answers(pool: &PgPool) -> Result<Vec<StandardAnswer>, StoreError> {
    let mut conn = pool.acquire().await?;

    let rows: Vec<(i32, String, String)> =
        sqlx::query_as("SELECT id, keyword, answer FROM standard_answer ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

    let mut categories = categories_by_answer(&mut *conn, None).await?;

    Ok(rows
        .into_iter()
        .map(|(id, keyword, answer)| StandardAnswer {
            id,
            keyword,
            answer,
            categories: categories.remove(&id).unwrap_or_default(),
        })
        .collect())
}

pub async fn fetch_standard_answer(
    pool: &PgPool,
    standard_answer_id: i32,
) -> Result<Option<StandardAnswer>, StoreError> {
    let mut conn = pool.acquire().await?;
    load_answer(&mut *conn, standard_answer_id).await
}

pub async fn insert_standard_answer(
    pool: &PgPool,
    request: &StandardAnswerRequest,
) -> Result<StandardAnswer, StoreError> {
    let mut tx = pool.begin().await?;

    let category_ids = require_categories(&mut *tx, &request.categories).await?;

    let (id,): (i32,) =
        sqlx::query_as("INSERT INTO standard_answer (keyword, answer) VALUES ($1, $2) RETURNING id")
            .bind(&request.keyword)
            .bind(&request.answer)
            .fetch_one(&mut *tx)
            .await?;

    link_categories(&mut *tx, id, &category_ids).await?;
    let created = load_answer(&mut *tx, id).await?.ok_or(StoreError::NotFound(id))?;
    tx.commit().await?;

    tracing::info!("Created standard answer {} ({})", created.id, created.keyword);
    Ok(created)
}

pub async fn update_standard_answer(
    pool: &PgPool,
    standard_answer_id: i32,
    request: &StandardAnswerRequest,
) -> Result<StandardAnswer, StoreError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query("UPDATE standard_answer SET keyword = $2, answer = $3 WHERE id = $1")
        .bind(standard_answer_id)
        .bind(&request.keyword)
        .bind(&request.answer)
        .execute(&mut *tx)
        .await?;
    if updated.rows_affected() == 0 {
        return Err(StoreError::NotFound(standard_answer_id));
    }

    let category_ids = require_categories(&mut *tx, &request.categories).await?;

    sqlx::query("DELETE FROM standard_answer__standard_answer_category WHERE standard_answer_id = $1")
        .bind(standard_answer_id)
        .execute(&mut *tx)
        .await?;
    link_categories(&mut *tx, standard_answer_id, &category_ids).await?;

    let answer = load_answer(&mut *tx, standard_answer_id)
        .await?
        .ok_or(StoreError::NotFound(standard_answer_id))?;
    tx.commit().await?;

    tracing::info!("Updated standard answer {}", standard_answer_id);
    Ok(answer)
}

/// Delete an answer; its category links go with it.
pub async fn remove_standard_answer(pool: &PgPool, standard_answer_id: i32) -> Result<(), StoreError> {
    let deleted = sqlx::query("DELETE FROM standard_answer WHERE id = $1")
        .bind(standard_answer_id)
        .execute(pool)
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(StoreError::NotFound(standard_answer_id));
    }
    tracing::info!("Removed standard answer {}", standard_answer_id);
    Ok(())
}

pub async fn insert_standard_answer_category(
    pool: &PgPool,
    category_name: &str,
) -> Result<StandardAnswerCategory, StoreError> {
    if !check_category_validity(category_name) {
        return Err(StoreError::InvalidCategoryName(category_name.to_string()));
    }

    let category = sqlx::query_as::<_, StandardAnswerCategory>(
        "INSERT INTO standard_answer_category (name) VALUES ($1) RETURNING id, name",
    )
    .bind(category_name)
    .fetch_one(pool)
    .await?;
    Ok(category)
}

/// Rename a category. A missing id is reported before an invalid name.
pub async fn update_standard_answer_category(
    pool: &PgPool,
    standard_answer_category_id: i32,
    category_name: &str,
) -> Result<StandardAnswerCategory, StoreError> {
    if !check_category_validity(category_name) {
        if fetch_standard_answer_category(pool, standard_answer_category_id)
            .await?
            .is_none()
        {
            return Err(StoreError::CategoryNotFound(standard_answer_category_id));
        }
        return Err(StoreError::InvalidCategoryName(category_name.to_string()));
    }

    // No returned row means the category is gone
    sqlx::query_as::<_, StandardAnswerCategory>(
        "UPDATE standard_answer_category SET name = $2 WHERE id = $1 RETURNING id, name",
    )
    .bind(standard_answer_category_id)
    .bind(category_name)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::CategoryNotFound(standard_answer_category_id))
}

pub async fn fetch_standard_answer_category(
    pool: &PgPool,
    standard_answer_category_id: i32,
) -> Result<Option<StandardAnswerCategory>, StoreError> {
    let category = sqlx::query_as::<_, StandardAnswerCategory>(
        "SELECT id, name FROM standard_answer_category WHERE id = $1",
    )
    .bind(standard_answer_category_id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn fetch_standard_answer_categories_by_ids(
    pool: &PgPool,
    standard_answer_category_ids: &[i32],
) -> Result<Vec<StandardAnswerCategory>, StoreError> {
    let mut conn = pool.acquire().await?;
    categories_by_ids(&mut *conn, standard_answer_category_ids).await
}

pub async fn fetch_standard_answer_categories(
    pool: &PgPool,
) -> Result<Vec<StandardAnswerCategory>, StoreError> {
    let categories = sqlx::query_as::<_, StandardAnswerCategory>(
        "SELECT id, name FROM standard_answer_category ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

/// Insert seed answers, creating any categories they name.
pub async fn seed_standard_answers(
    pool: &PgPool,
    seeds: &[StandardAnswerSeed],
) -> Result<usize, StoreError> {
    let mut tx = pool.begin().await?;

    for seed in seeds {
        let mut category_ids = Vec::with_capacity(seed.categories.len());
        for name in &seed.categories {
            if !check_category_validity(name) {
                return Err(StoreError::InvalidCategoryName(name.clone()));
            }
            let (id,): (i32,) = sqlx::query_as(
                r#"
                INSERT INTO standard_answer_category (name) VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
            category_ids.push(id);
        }

        let (answer_id,): (i32,) =
            sqlx::query_as("INSERT INTO standard_answer (keyword, answer) VALUES ($1, $2) RETURNING id")
                .bind(&seed.keyword)
                .bind(&seed.answer)
                .fetch_one(&mut *tx)
                .await?;
        link_categories(&mut *tx, answer_id, &category_ids).await?;
    }

    tx.commit().await?;
    Ok(seeds.len())
}

/// Dedupe the requested ids and make sure every one exists.
async fn require_categories(conn: &mut PgConnection, requested: &[i32]) -> Result<Vec<i32>, StoreError> {
    let wanted: Vec<i32> = requested.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let existing = categories_by_ids(conn, &wanted).await?;
    if existing.len() != wanted.len() {
        return Err(StoreError::UnknownCategories(requested.to_vec()));
    }
    Ok(wanted)
}

async fn categories_by_ids(
    conn: &mut PgConnection,
    ids: &[i32],
) -> Result<Vec<StandardAnswerCategory>, StoreError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let categories = sqlx::query_as::<_, StandardAnswerCategory>(
        "SELECT id, name FROM standard_answer_category WHERE id = ANY($1) ORDER BY id",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;
    Ok(categories)
}

async fn link_categories(
    conn: &mut PgConnection,
    standard_answer_id: i32,
    category_ids: &[i32],
) -> Result<(), StoreError> {
    for category_id in category_ids {
        sqlx::query(
            r#"
            INSERT INTO standard_answer__standard_answer_category
                (standard_answer_id, standard_answer_category_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(standard_answer_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Category lists keyed by answer id; `None` loads every answer's links.
async fn categories_by_answer(
    conn: &mut PgConnection,
    standard_answer_id: Option<i32>,
) -> Result<HashMap<i32, Vec<StandardAnswerCategory>>, StoreError> {
    let rows: Vec<(i32, i32, String)> = sqlx::query_as(
        r#"
        SELECT link.standard_answer_id, category.id, category.name
        FROM standard_answer__standard_answer_category link
        JOIN standard_answer_category category
          ON category.id = link.standard_answer_category_id
        WHERE $1::int IS NULL OR link.standard_answer_id = $1
        ORDER BY category.id
        "#,
    )
    .bind(standard_answer_id)
    .fetch_all(&mut *conn)
    .await?;

    let mut grouped: HashMap<i32, Vec<StandardAnswerCategory>> = HashMap::new();
    for (answer_id, id, name) in rows {
        grouped
            .entry(answer_id)
            .or_default()
            .push(StandardAnswerCategory { id, name });
    }
    Ok(grouped)
}

async fn load_answer(
    conn: &mut PgConnection,
    standard_answer_id: i32,
) -> Result<Option<StandardAnswer>, StoreError> {
    let row: Option<(i32, String, String)> =
        sqlx::query_as("SELECT id, keyword, answer FROM standard_answer WHERE id = $1")
            .bind(standard_answer_id)
            .fetch_optional(&mut *conn)
            .await?;

    let Some((id, keyword, answer)) = row else {
        return Ok(None);
    };

    let mut categories = categories_by_answer(conn, Some(id)).await?;
    Ok(Some(StandardAnswer {
        id,
        keyword,
        answer,
        categories: categories.remove(&id).unwrap_or_default(),
    }))
}
