use std::process::ExitCode;

use movie_catalog::wiring;

/// Print the sorted catalog for a dataset.
///
/// Usage: `movie-catalog <dataset-id-or-path> [--json]`
///
/// Dataset ids are resolved under `MOVIE_DATA_DIR` (default: current
/// directory); a path to a `.csv`, `.json` or `.parquet` file also works.
fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(dataset) = args.next() else {
        eprintln!("usage: movie-catalog <dataset-id-or-path> [--json]");
        return ExitCode::FAILURE;
    };
    let as_json = args.any(|a| a == "--json");

    let data_root = std::env::var("MOVIE_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let catalog = wiring::catalog(data_root);

    match catalog.movie_list(&dataset) {
        Ok(movies) => {
            if as_json {
                match serde_json::to_string_pretty(&movies) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for movie in &movies {
                    println!("{movie}");
                }
                log::info!("{} movies in dataset '{dataset}'", movies.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
