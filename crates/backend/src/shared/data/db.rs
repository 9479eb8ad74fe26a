use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Open the sqlite database and make sure the schema exists.
pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    tracing::info!("Database initialized at {}", db_path);
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("Database connection not initialized")
}

/// Create all tables if they do not exist yet. Statements are idempotent so
/// startup doubles as the minimal schema migration.
async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS sponsor_stores (
            id TEXT PRIMARY KEY NOT NULL,
            store_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            address TEXT,
            description TEXT,
            category TEXT,
            business_hours TEXT,
            website TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            logo_url TEXT,
            cover_image_url TEXT,
            registration_date TEXT NOT NULL,
            last_login_date TEXT,
            total_views INTEGER NOT NULL DEFAULT 0,
            total_bookings INTEGER NOT NULL DEFAULT 0,
            average_rating REAL NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS tourism_guides (
            id TEXT PRIMARY KEY NOT NULL,
            store_id TEXT NOT NULL REFERENCES sponsor_stores(id),
            guide_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            gender TEXT,
            age INTEGER,
            languages TEXT NOT NULL DEFAULT '[]',
            experience TEXT,
            introduction TEXT,
            specialties TEXT,
            hourly_rate REAL,
            availability TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            profile_image_url TEXT,
            total_bookings INTEGER NOT NULL DEFAULT 0,
            average_rating REAL NOT NULL DEFAULT 0,
            is_available INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS experience_programs (
            id TEXT PRIMARY KEY NOT NULL,
            store_id TEXT NOT NULL REFERENCES sponsor_stores(id),
            program_name TEXT NOT NULL,
            description TEXT,
            duration INTEGER,
            price REAL NOT NULL,
            max_participants INTEGER NOT NULL DEFAULT 10,
            languages TEXT NOT NULL DEFAULT '[]',
            category TEXT,
            image_url TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id TEXT PRIMARY KEY NOT NULL,
            store_id TEXT NOT NULL REFERENCES sponsor_stores(id),
            guide_id TEXT REFERENCES tourism_guides(id),
            program_id TEXT REFERENCES experience_programs(id),
            customer_name TEXT NOT NULL,
            customer_email TEXT NOT NULL,
            customer_phone TEXT,
            participant_count INTEGER NOT NULL DEFAULT 1,
            reservation_date TEXT NOT NULL,
            total_price REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'confirmed',
            special_requests TEXT,
            payment_status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY NOT NULL,
            store_id TEXT NOT NULL REFERENCES sponsor_stores(id),
            guide_id TEXT REFERENCES tourism_guides(id),
            reservation_id TEXT REFERENCES reservations(id),
            customer_name TEXT NOT NULL,
            rating INTEGER NOT NULL,
            comment TEXT,
            is_public INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            user_type TEXT NOT NULL DEFAULT 'sponsor',
            store_id TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_admin INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS idx_tourism_guides_store ON tourism_guides(store_id);
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS idx_reservations_store ON reservations(store_id);
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS idx_reviews_store ON reviews(store_id);
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}
