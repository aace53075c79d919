//! Entry point for objinfo.
//! Loads an OBJ file and prints a summary, optionally followed by its faces.

use anyhow::{Context, Result, bail};
use objmesh::{Face, Mesh};

const USAGE: &str = "usage: objinfo <path.obj> [--faces[=N]] [--log=<level>]";

fn parse_path_arg(args: &[String]) -> Option<&str> {
    // First argument that is not a flag; args[0] is the program name.
    args.iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str)
}

fn parse_faces_arg(args: &[String]) -> Option<usize> {
    // --faces prints every face, --faces=N at most N
    let mut limit = None;
    for arg in args {
        if arg == "--faces" {
            limit = Some(usize::MAX);
        } else if let Some(val) = arg.strip_prefix("--faces=") {
            limit = match val.parse::<usize>() {
                Ok(n) => Some(n),
                Err(_) => {
                    eprintln!("[warn] Invalid face count '{}', printing all faces.", val);
                    Some(usize::MAX)
                }
            };
        }
    }
    limit
}

fn parse_log_arg(args: &[String]) -> Option<&str> {
    args.iter().rev().find_map(|arg| arg.strip_prefix("--log="))
}

fn summary(mesh: &Mesh) -> String {
    let mut out = format!("faces: {}", mesh.len());
    if let Some(b) = mesh.bounds() {
        let size = b.size();
        out.push_str(&format!(
            "\nbounds: min ({} {} {}) max ({} {} {})\nsize: {} x {} x {}",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z, size.x, size.y, size.z
        ));
    }
    out
}

fn format_face(index: usize, face: &Face) -> String {
    let corners: Vec<String> = face
        .vertices
        .iter()
        .map(|v| {
            format!(
                "v({} {} {}) vt({} {}) vn({} {} {})",
                v.position.x,
                v.position.y,
                v.position.z,
                v.tex_coord.x,
                v.tex_coord.y,
                v.normal.x,
                v.normal.y,
                v.normal.z
            )
        })
        .collect();
    format!("{}: {}", index, corners.join(" | "))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = parse_log_arg(&args) {
        logger.parse_filters(filter);
    }
    logger.init();

    let Some(path) = parse_path_arg(&args) else {
        bail!(USAGE);
    };
    let face_limit = parse_faces_arg(&args);
    log::info!("objinfo: path={}, faces={:?}", path, face_limit);

    let mesh = Mesh::load_from_path(path)
        .with_context(|| format!("Failed to load OBJ file: {}", path))?;
    log::info!("Loaded {} faces from {}", mesh.len(), path);

    println!("{}", summary(&mesh));
    if let Some(limit) = face_limit {
        for (i, face) in mesh.iter().take(limit).enumerate() {
            println!("{}", format_face(i, face));
        }
        if limit < mesh.len() {
            println!("... {} more", mesh.len() - limit);
        }
    }
    Ok(())
}
