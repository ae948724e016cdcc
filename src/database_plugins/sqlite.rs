// ABOUTME: SQLite implementation of the roster store using sqlx
// ABOUTME: Inline migrations, rfc3339 text dates, and conflict-target upserts

//! SQLite database implementation
//!
//! Dates are stored as rfc3339 TEXT and retrieval order is insertion order
//! (`ORDER BY rowid`). Upserts use `ON CONFLICT` against the unique email
//! keys so concurrent registrations for the same key cannot produce
//! duplicate rows.

use super::{DatabaseProvider, UpsertOutcome};
use crate::models::{Pair, Student, Teacher};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .with_context(|| format!("failed to open SQLite database at {database_url}"))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS teachers (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                date_added TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS students (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                date_suspended TEXT,
                date_added TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS pairs (
                id TEXT PRIMARY KEY,
                teacher_email TEXT NOT NULL,
                student_email TEXT NOT NULL,
                date_added TEXT NOT NULL,
                UNIQUE (teacher_email, student_email)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Indexes for the set-membership lookups
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_pairs_teacher_email ON pairs(teacher_email)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_students_email ON students(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn upsert_teacher(&self, email: &str) -> Result<UpsertOutcome<Teacher>> {
        let candidate = Teacher::new(email)?;

        let result = sqlx::query(
            "INSERT INTO teachers (id, email, date_added) VALUES (?1, ?2, ?3)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(candidate.id.to_string())
        .bind(&candidate.email)
        .bind(candidate.date_added.to_rfc3339())
        .execute(&self.pool)
        .await?;
        let created = result.rows_affected() > 0;

        let record = self
            .get_teacher_by_email(email)
            .await?
            .ok_or_else(|| anyhow!("teacher {email} missing after upsert"))?;

        Ok(UpsertOutcome { record, created })
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        let row = sqlx::query("SELECT id, email, date_added FROM teachers WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_teacher(&r)).transpose()
    }

    async fn upsert_student(&self, email: &str) -> Result<UpsertOutcome<Student>> {
        let candidate = Student::new(email)?;

        let result = sqlx::query(
            "INSERT INTO students (id, email, date_suspended, date_added) VALUES (?1, ?2, NULL, ?3)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(candidate.id.to_string())
        .bind(&candidate.email)
        .bind(candidate.date_added.to_rfc3339())
        .execute(&self.pool)
        .await?;
        let created = result.rows_affected() > 0;

        let record = self
            .get_student_by_email(email)
            .await?
            .ok_or_else(|| anyhow!("student {email} missing after upsert"))?;

        Ok(UpsertOutcome { record, created })
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        let row = sqlx::query(
            "SELECT id, email, date_suspended, date_added FROM students WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_student(&r)).transpose()
    }

    async fn suspend_student(&self, email: &str, suspended_at: DateTime<Utc>) -> Result<Student> {
        let candidate = Student::new(email)?;

        sqlx::query(
            "INSERT INTO students (id, email, date_suspended, date_added) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (email) DO UPDATE SET date_suspended = excluded.date_suspended",
        )
        .bind(candidate.id.to_string())
        .bind(&candidate.email)
        .bind(suspended_at.to_rfc3339())
        .bind(candidate.date_added.to_rfc3339())
        .execute(&self.pool)
        .await?;

        self.get_student_by_email(email)
            .await?
            .ok_or_else(|| anyhow!("student {email} missing after suspension"))
    }

    async fn get_unsuspended_students(&self, emails: &[String]) -> Result<Vec<Student>> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, email, date_suspended, date_added FROM students \
             WHERE date_suspended IS NULL AND email IN (",
        );
        let mut separated = query.separated(", ");
        for email in emails {
            separated.push_bind(email);
        }
        query.push(") ORDER BY rowid");

        let rows = query.build().fetch_all(&self.pool).await?;
        rows.iter().map(row_to_student).collect()
    }

    async fn upsert_pair(
        &self,
        teacher_email: &str,
        student_email: &str,
    ) -> Result<UpsertOutcome<Pair>> {
        let candidate = Pair::new(teacher_email, student_email)?;

        let result = sqlx::query(
            "INSERT INTO pairs (id, teacher_email, student_email, date_added) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (teacher_email, student_email) DO NOTHING",
        )
        .bind(candidate.id.to_string())
        .bind(&candidate.teacher_email)
        .bind(&candidate.student_email)
        .bind(candidate.date_added.to_rfc3339())
        .execute(&self.pool)
        .await?;
        let created = result.rows_affected() > 0;

        let row = sqlx::query(
            "SELECT id, teacher_email, student_email, date_added FROM pairs \
             WHERE teacher_email = ?1 AND student_email = ?2",
        )
        .bind(teacher_email)
        .bind(student_email)
        .fetch_optional(&self.pool)
        .await?;

        let record = row
            .map(|r| row_to_pair(&r))
            .transpose()?
            .ok_or_else(|| anyhow!("pair ({teacher_email}, {student_email}) missing after upsert"))?;

        Ok(UpsertOutcome { record, created })
    }

    async fn get_pairs_for_teachers(&self, teacher_emails: &[String]) -> Result<Vec<Pair>> {
        if teacher_emails.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, teacher_email, student_email, date_added FROM pairs \
             WHERE teacher_email IN (",
        );
        let mut separated = query.separated(", ");
        for email in teacher_emails {
            separated.push_bind(email);
        }
        query.push(") ORDER BY rowid");

        let rows = query.build().fetch_all(&self.pool).await?;
        rows.iter().map(row_to_pair).collect()
    }
}

fn row_to_teacher(row: &SqliteRow) -> Result<Teacher> {
    let id: String = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let date_added: String = row.try_get("date_added")?;

    Ok(Teacher {
        id: Uuid::parse_str(&id)?,
        email,
        date_added: parse_stored_date(&date_added)?,
    })
}

fn row_to_student(row: &SqliteRow) -> Result<Student> {
    let id: String = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let date_suspended: Option<String> = row.try_get("date_suspended")?;
    let date_added: String = row.try_get("date_added")?;

    Ok(Student {
        id: Uuid::parse_str(&id)?,
        email,
        date_suspended: date_suspended
            .as_deref()
            .map(parse_stored_date)
            .transpose()?,
        date_added: parse_stored_date(&date_added)?,
    })
}

fn row_to_pair(row: &SqliteRow) -> Result<Pair> {
    let id: String = row.try_get("id")?;
    let teacher_email: String = row.try_get("teacher_email")?;
    let student_email: String = row.try_get("student_email")?;
    let date_added: String = row.try_get("date_added")?;

    Ok(Pair {
        id: Uuid::parse_str(&id)?,
        teacher_email,
        student_email,
        date_added: parse_stored_date(&date_added)?,
    })
}

fn parse_stored_date(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
