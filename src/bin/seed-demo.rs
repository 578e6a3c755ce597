//! Demo data seed script
//!
//! Seeds the database with a few families:
//! - 4 parents
//! - 5 kids, each linked to one or two parents
//!
//! Usage:
//!   DATABASE_URL=sqlite://data/app.db?mode=rwc ./seed-demo [--reset]

use anyhow::{Context, Result};
use clap::Parser;

use kids_parents_api::{
    db,
    models::{
        kid::{KidBase, KidCreate},
        parent::{ParentBase, ParentCreate},
    },
    services::{kids::KidService, parents::ParentService},
};

#[derive(Parser)]
#[command(name = "seed-demo", about = "Seed the kids/parents database with demo families")]
struct Args {
    /// Delete every existing kid, parent and link first
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL required")?;
    let pool = db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    db::run_migrations(&pool).await.context("Failed to run migrations")?;

    let mut conn = pool.acquire().await?;

    if args.reset {
        tracing::info!("Removing existing rows...");
        sqlx::query("DELETE FROM parentkidlink").execute(&mut *conn).await?;
        sqlx::query("DELETE FROM kid").execute(&mut *conn).await?;
        sqlx::query("DELETE FROM parent").execute(&mut *conn).await?;
    }

    tracing::info!("Inserting parents...");
    let parents = [
        ("Laura Gómez Ruiz", "laura.gomez@example.com"),
        ("Javier Martín Soto", "javier.martin@example.com"),
        ("Carmen Díaz Vega", "carmen.diaz@example.com"),
        ("Pablo Navarro Gil", "pablo.navarro@example.com"),
    ];
    let mut parent_ids = Vec::with_capacity(parents.len());
    for (name_and_surname, email) in parents {
        let req = ParentCreate {
            base: ParentBase {
                name_and_surname: name_and_surname.to_string(),
                email: email.to_string(),
            },
            kid_ids: None,
        };
        let parent = ParentService::create(&mut conn, &req)
            .await
            .with_context(|| format!("Failed to insert parent {email}"))?;
        parent_ids.push(parent.id);
    }

    tracing::info!("Inserting kids...");
    // (name, first surname, second surname, indexes into `parent_ids`)
    let kids: [(&str, &str, &str, &[usize]); 5] = [
        ("Lucía", "Martín", "Gómez", &[0, 1]),
        ("Hugo", "Martín", "Gómez", &[0, 1]),
        ("Marta", "Navarro", "Díaz", &[2, 3]),
        ("Daniel", "Navarro", "Díaz", &[2]),
        ("Sara", "Gómez", "Ruiz", &[0]),
    ];
    for (name, first_surname, second_surname, parent_idx) in kids {
        let req = KidCreate {
            base: KidBase {
                name: name.to_string(),
                first_surname: first_surname.to_string(),
                second_surname: second_surname.to_string(),
            },
            parent_ids: Some(parent_idx.iter().map(|&i| parent_ids[i]).collect()),
        };
        let kid = KidService::create(&mut conn, &req)
            .await
            .with_context(|| format!("Failed to insert kid {name}"))?;
        tracing::info!(kid_id = kid.id, parents = kid.parents.len(), "Seeded {}", name);
    }

    tracing::info!("Seed completed");
    Ok(())
}
