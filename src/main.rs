use anyhow::Context;
use clap::Parser;
use pantheon_graph::analysis;
use pantheon_graph::dataset;
use pantheon_graph::graph::Field;
use std::path::PathBuf;

const DOMAINS: [&str; 8] = [
    "INSTITUTIONS",
    "EXPLORATION",
    "ARTS",
    "SCIENCE & TECHNOLOGY",
    "SPORTS",
    "BUSINESS & LAW",
    "HUMANITIES",
    "PUBLIC FIGURE",
];

/// Link-bias analysis over the Pantheon notable-people dataset
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Analyze the full dataset instead of the 1000-row subset
    #[arg(long)]
    full: bool,

    /// Directory containing the Pantheon CSV files
    #[arg(long, default_value = "datasets")]
    data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let (nodes, edges) = if args.full {
        ("pantheon_nodes_all.csv", "pantheon_edges_all.csv")
    } else {
        ("pantheon_nodes_1000.csv", "pantheon_edges_1000.csv")
    };
    let nodes_path = args.data_dir.join(nodes);
    let edges_path = args.data_dir.join(edges);

    println!("Pantheon Graph v{}", pantheon_graph::version());
    println!("==========================================");
    println!();

    let data = dataset::load(&nodes_path, &edges_path)
        .with_context(|| format!("loading dataset from {}", args.data_dir.display()))?;
    let graph = &data.graph;
    let names = &data.by_name;
    println!(
        "Loaded {} people and {} links",
        graph.num_vertices(),
        graph.num_arcs()
    );

    println!("\n=== Step 1: Degrees ===");
    println!(
        "(1) Highest out-degree: {:?}",
        analysis::max_out_degree_names(graph)?
    );
    println!(
        "(2a) People with out-degree 0: {}",
        analysis::count_with_out_degree(graph, 0)
    );
    println!(
        "(2b) People with out-degree 1: {}",
        analysis::count_with_out_degree(graph, 1)
    );
    println!(
        "(3) Highest in-degree: {}",
        analysis::max_in_degree_name(graph)?
    );

    let top_woman = analysis::max_in_degree_in_group(graph, Field::Gender, "Female")?;
    let top_woman_in = graph.in_degree(top_woman)?;
    println!(
        "(4a) Highest in-degree woman: {} ({} in-links)",
        top_woman.name(),
        top_woman_in
    );
    println!(
        "(4b) Men with more in-links than her: {}",
        analysis::count_in_degree_above(graph, Field::Gender, "Male", top_woman_in)
    );

    println!("\n(5) People per country:");
    for (country, count) in analysis::grouped_counts(graph, Field::Country) {
        println!("  {country}: {count}");
    }

    println!("\n=== Step 2: Paths ===");
    for (from, to) in [
        ("Madeleine Albright", "J. R. R. Tolkien"),
        ("Bill Gates", "Stephen King"),
    ] {
        match analysis::shortest_path(graph, names, from, to) {
            Ok(path) => println!(
                "(1) {} -> {}: {:?} ({} steps)",
                from,
                to,
                path,
                path.len() - 1
            ),
            Err(err) => println!("(1) {from} -> {to}: {err}"),
        }
    }
    match analysis::farthest_names(graph, names, "Madeleine Albright") {
        Ok(far) => println!("(2) Farthest from Madeleine Albright: {far:?}"),
        Err(err) => println!("(2) Farthest from Madeleine Albright: {err}"),
    }

    println!("\n=== Step 3: Link bias ===");
    println!("(1) Population fractions by gender:");
    for gender in ["Female", "Male"] {
        println!(
            "  {}: {:.4}",
            gender,
            analysis::group_fraction(graph, Field::Gender, gender)?
        );
    }
    println!("(2) Average in-group link fractions and representation indices:");
    for gender in ["Female", "Male"] {
        report_group(graph, Field::Gender, gender);
    }
    println!("(3) By domain:");
    for domain in DOMAINS {
        report_group(graph, Field::Domain, domain);
    }

    Ok(())
}

/// Print the three bias statistics for one group, downgrading expected
/// failures (empty or link-less groups in the subset) to a note.
fn report_group(graph: &pantheon_graph::DiGraph<pantheon_graph::Person>, field: Field, value: &str) {
    match (
        analysis::group_fraction(graph, field, value),
        analysis::avg_in_group_link_fraction(graph, field, value),
    ) {
        (Ok(fraction), Ok(avg)) => println!(
            "  {}: fraction {:.4}, in-group link fraction {:.4}, representation index {:.2}",
            value,
            fraction,
            avg,
            avg / fraction
        ),
        (_, Err(err)) | (Err(err), _) => println!("  {value}: {err}"),
    }
}
