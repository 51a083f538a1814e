//! Optional demo data, inserted at startup when SEED_DEMO_DATA is set and
//! the store is still empty. Gives the search endpoints something to match.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::store;

pub async fn seed_demo_data(pool: &PgPool) -> Result<()> {
    let companies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(pool)
        .await?;
    if companies > 0 {
        info!("Store already populated, skipping demo seed");
        return Ok(());
    }

    let facebook = store::companies::insert(pool, "Facebook").await?;
    let twitter = store::companies::insert(pool, "Twitter").await?;

    let barak = store::recruiters::insert(pool, "Barak Itzhaki", "barakItzhaki@gmail.com").await?;
    let pogba = store::recruiters::insert(pool, "Paul Pogba", "paulPogba@hotmail.co.il").await?;

    store::associations::associate(pool, facebook.id, barak.id).await?;
    store::associations::associate(pool, twitter.id, pogba.id).await?;

    store::jobs::insert(pool, "Java Developer", "15K", "Tel-Aviv", facebook.id, barak.id).await?;
    store::jobs::insert(pool, "Java Developer", "20K", "Holon", twitter.id, pogba.id).await?;
    store::jobs::insert(pool, "CPP Developer", "12K", "Ness-Ziona", twitter.id, pogba.id).await?;

    info!("Seeded demo companies, recruiters and jobs");
    Ok(())
}
