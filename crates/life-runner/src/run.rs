//! Headless generation loop.

use anyhow::{Context, Result};
use life_core::RunConfig;
use life_world::{Pattern, Universe};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    pub generations: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    pub extinct_at: Option<u64>,
}

/// Build the starting universe: the pattern file stamped onto the centre of an
/// empty `universe.width` x `universe.height` board if one is configured (or the
/// pattern alone with `fit_to_pattern`), otherwise a random fill.
pub fn build_universe(config: &RunConfig) -> Result<Universe> {
    let Some(path) = &config.pattern_path else {
        return Ok(Universe::from_config(&config.universe)?);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading pattern {}", path.display()))?;
    let pattern = Pattern::parse(&text, &config.glyphs)
        .with_context(|| format!("parsing pattern {}", path.display()))?;

    let universe = if config.fit_to_pattern {
        Universe::from_pattern(&pattern)
    } else {
        let (width, height) = (config.universe.width, config.universe.height);
        if pattern.width() > width || pattern.height() > height {
            warn!(
                pattern_width = pattern.width(),
                pattern_height = pattern.height(),
                width,
                height,
                "Pattern is larger than the board and will wrap onto itself"
            );
        }
        let mut universe = Universe::empty(width, height)?;
        let row = (height / 2) as i64 - (pattern.height() / 2) as i64;
        let col = (width / 2) as i64 - (pattern.width() / 2) as i64;
        universe.insert_pattern(row as i32, col as i32, &pattern);
        universe
    };

    info!(
        path = %path.display(),
        width = universe.width(),
        height = universe.height(),
        population = universe.population(),
        "Loaded pattern"
    );
    Ok(universe)
}

pub struct Runner {
    universe: Universe,
    generations: u64,
    report_every: u64,
}

impl Runner {
    pub fn new(universe: Universe, config: &RunConfig) -> Self {
        Self {
            universe,
            generations: config.generations,
            report_every: config.report_every,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Advance the configured number of generations
    #[instrument(skip(self), fields(generations = self.generations))]
    pub fn run(&mut self) -> RunSummary {
        let initial_population = self.universe.population();
        let mut peak_population = initial_population;
        let mut extinct_at = (initial_population == 0).then_some(0);

        info!(
            width = self.universe.width(),
            height = self.universe.height(),
            population = initial_population,
            "Starting run for {} generations",
            self.generations
        );

        for generation in 1..=self.generations {
            self.universe.tick();
            let population = self.universe.population();
            peak_population = peak_population.max(population);

            if population == 0 && extinct_at.is_none() {
                extinct_at = Some(generation);
                info!(generation, "Universe went extinct");
            }

            if self.report_every > 0 && generation % self.report_every == 0 {
                info!(generation, population, "Generation {}/{}", generation, self.generations);
            }
        }

        let summary = RunSummary {
            width: self.universe.width(),
            height: self.universe.height(),
            generations: self.generations,
            initial_population,
            final_population: self.universe.population(),
            peak_population,
            extinct_at,
        };

        info!(
            event = "run_summary",
            initial_population = summary.initial_population,
            final_population = summary.final_population,
            peak_population = summary.peak_population,
            extinct = summary.extinct_at.is_some(),
            "Run complete"
        );

        summary
    }
}
