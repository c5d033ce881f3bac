use anyhow::Result;
use infinity_army_to_sqlite::{
    cli::{Cli, Commands},
    feed::Feed,
    lang::Languages,
    loader::pipeline,
    schema::table_names,
    store::Store,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Load {
            input_dir,
            output_db,
            init,
            languages,
        } => {
            let start = Instant::now();

            let languages = Languages::new(languages)?;
            let feed = Feed::open(&input_dir, &languages)?;

            let mut store = Store::open(&output_db, init)?;
            store.create_schema(&languages)?;

            println!("Loading army data from {:?}...\n", input_dir);
            let record_count = pipeline::run(&mut store, &feed, &languages)?;

            let elapsed = start.elapsed();
            println!(
                "\nLoaded {:?} ({} records) in {:.1}s",
                output_db,
                record_count,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListTables => {
            println!("Normalized tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
