//! Development fixtures.

use crate::{error::AppResult, models::NewProduction, store::Store};

struct Sample {
    title: &'static str,
    genre: &'static str,
    budget: f64,
    director: &'static str,
    description: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Hamlet",
        genre: "Drama",
        budget: 10000.0,
        director: "Bill S. Peare",
        description: "blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah",
    },
    Sample {
        title: "Cats",
        genre: "Musical",
        budget: 20000.0,
        director: "Andrew Lloyd Webber",
        description: "blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah blah",
    },
    Sample {
        title: "Carmen",
        genre: "Opera",
        budget: 20000.0,
        director: "Georges Bizet",
        description: "blah",
    },
    Sample {
        title: "Hamilton",
        genre: "Musical",
        budget: 40000.0,
        director: "Lin-Manuel Miranda",
        description: "blah blah",
    },
];

/// Wipes every production (and with them all cast members) and loads the samples.
pub async fn run(store: &Store) -> AppResult<usize> {
    let productions = store.productions();

    let cleared = productions.clear().await?;
    tracing::info!(cleared, "cleared productions");

    for sample in SAMPLES {
        productions
            .create(NewProduction {
                title: sample.title.to_string(),
                genre: sample.genre.to_string(),
                budget: Some(sample.budget),
                image: None,
                director: Some(sample.director.to_string()),
                description: Some(sample.description.to_string()),
                ongoing: Some(true),
            })
            .await?;
    }
    tracing::info!(created = SAMPLES.len(), "seeded productions");

    Ok(SAMPLES.len())
}
