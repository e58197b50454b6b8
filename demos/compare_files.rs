use std::{env, fs, process};

use vsm_similarity::{VectorSpaceModel, VsmConfig};

/// usage: compare_files <file> <file> [<file> ...]
/// prints the similarity of the first file to each of the others
fn main() {
    env_logger::init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.len() < 2 {
        eprintln!("usage: compare_files <file> <file> [<file> ...]");
        process::exit(2);
    }

    let mut docs = Vec::with_capacity(paths.len());
    for path in &paths {
        match fs::read_to_string(path) {
            Ok(text) => docs.push((path.clone(), text)),
            Err(e) => {
                eprintln!("failed to read {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let vsm: VectorSpaceModel = match VectorSpaceModel::new(docs, VsmConfig::default()) {
        Ok(vsm) => vsm,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    for other in &paths[1..] {
        match vsm.similarity(&paths[0], other) {
            Ok(sim) => println!("{}\t{}\t{:.6}", paths[0], other, sim),
            Err(e) => eprintln!("{}", e),
        }
    }
}
