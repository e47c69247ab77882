use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::core::error::Result;
use crate::core::settings::Settings;
use crate::core::validation::validate;
use crate::types::{Project, DEMO_SENTINEL};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    projects: vec![
        Project::new(
            "F1 Analysis",
            "f1-analysis",
            "What are the most predictable F1 races? Has it change over time? Check this analysis with Dash.",
            DEMO_SENTINEL,
            "https://github.com/mrtwolf7/projects/tree/main/f1_analysis",
            "dash",
            &["Dash", "Pandas"],
        ),
        Project::new(
            "Weather data explorer",
            "weather-analysis",
            "Does it always rain on Easter Monday in Rome? Is it worse than other italian cities?",
            "https://weather-it78.onrender.com",
            "https://github.com/mrtwolf7/projects/tree/main/weather",
            "dash",
            &["Dash", "Pandas"],
        ),
        Project::new(
            "Tennis predictability",
            "tennis-predictability",
            "Ah, tennis nowadays is so predictable. How true is that?",
            "https://tennis-predictability.vercel.app/",
            "https://github.com/mrtwolf7/projects/tree/main/tennis",
            "svelte",
            &["Svelte", "D3", "Pandas"],
        ),
    ],
});

/// Ordered, read-only list of projects. Serializes as a bare JSON array.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Catalog { projects }
    }

    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Declaration order is display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// First match wins, so lookups stay deterministic if slugs ever collide.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn load_from_storage(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).inspect_err(|err| {
        error!("Error opening catalog file {}: {}", path.display(), err);
    })?;

    let mut buffer: Vec<u8> = Vec::new();
    let size = BufReader::new(file).read_to_end(&mut buffer)?;
    debug!("Catalog data size: {}", size);

    let catalog = serde_json::from_slice::<Catalog>(&buffer).inspect_err(|err| {
        error!("Catalog data structure is incorrect: {}", err);
    })?;
    info!(
        "Loaded {} project(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

pub fn write_local_db(path: impl AsRef<Path>, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).inspect_err(|err| {
        error!("Could not create catalog file {}: {}", path.display(), err);
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog)?;
    writer.flush()?;
    info!("Wrote {} project(s) to {}", catalog.len(), path.display());
    Ok(())
}

/// Picks the file catalog named in `settings`, or the built-in one, and rejects it if invalid.
pub fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let catalog = match &settings.catalog_path.value {
        Some(path) => load_from_storage(path)?,
        None => Catalog::builtin().clone(),
    };
    validate(&catalog).inspect_err(|err| {
        error!("Refusing to serve catalog: {}", err);
    })?;
    Ok(catalog)
}
