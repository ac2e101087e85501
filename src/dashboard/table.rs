use rand::{rngs::StdRng, Rng, SeedableRng};

pub const MAX_ROWS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "🤖 LLM")]
    Llm,
    #[serde(rename = "📊 Data")]
    Data,
    #[serde(rename = "⚙️ Tool")]
    Tool,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Llm, Category::Data, Category::Tool];

    pub fn label(self) -> &'static str {
        match self {
            Category::Llm => "🤖 LLM",
            Category::Data => "📊 Data",
            Category::Tool => "⚙️ Tool",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Row {
    #[serde(rename = "Preview")]
    pub preview: String,
    #[serde(rename = "Views")]
    pub views: u32,
    #[serde(rename = "Active")]
    pub active: bool,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Progress")]
    pub progress: u8,
}

/// Build the demo table. The generator is seeded so the same (rows, seed)
/// pair always yields the same table.
pub fn generate(rows: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|i| Row {
            preview: format!("https://picsum.photos/400/200?lock={}", i),
            views: rng.gen_range(0..1000),
            active: rng.gen_bool(0.5),
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            progress: rng.gen_range(1..100),
        })
        .collect()
}
