use maple::world::metadata::mob_ids_from_name;
use maple::YamlStringArchive;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: mob_lookup <data-root> <search>");
        std::process::exit(2);
    }
    let root = Path::new(&args[1]);
    let search = &args[2];

    let archive = match YamlStringArchive::from_path(&root.join("string/mob_names.yaml")) {
        Ok(archive) => archive,
        Err(err) => {
            eprintln!("mob_lookup: {}", err);
            std::process::exit(1);
        }
    };

    let matches = mob_ids_from_name(&archive, search);
    for (mob_id, name) in &matches {
        println!("{mob_id}: {name}");
    }
    println!(
        "{} match(es) for '{}' across {} mobs",
        matches.len(),
        search,
        archive.len()
    );
}
