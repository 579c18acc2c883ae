use std::env;
use std::fs;
use std::path::Path;

// La URL del backend se fija al compilar: un .env local puede definir
// API_BASE_URL y aquí se reexporta como variable del compilador, que
// constants.rs recoge con option_env!. Sin .env aplica el default de
// desarrollo (localhost:3000).
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=Sin archivo .env: se usará la API de desarrollo. \
             Copia .env.example a .env para apuntar a otro backend."
        );
        return;
    }

    let contenido = match fs::read_to_string(env_file) {
        Ok(contenido) => contenido,
        Err(_) => return,
    };

    for linea in contenido.lines() {
        let linea = linea.trim();
        if linea.is_empty() || linea.starts_with('#') {
            continue;
        }

        let Some((clave, valor)) = linea.split_once('=') else {
            continue;
        };

        // El entorno del build manda sobre el .env
        let clave = clave.trim();
        if env::var(clave).is_err() {
            println!("cargo:rustc-env={}={}", clave, valor.trim());
        }
    }
}
