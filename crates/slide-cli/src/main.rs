use serde_json::Value;
use slide_core::get_params;
use slide_i18n::{translate_page, Page, PageNode, PreferenceStore};

fn main() {
    // Cargar .env si existe para la ruta del archivo de preferencia
    let _ = dotenvy::dotenv();
    // CLI mínima:
    //   slide-cli params [--file <opciones.json>]
    //   slide-cli translate [--lang <idioma>] [--file <pagina.json>]
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "params" {
        let mut file: Option<String> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--file" => {
                    i += 1;
                    if i < args.len() { file = Some(args[i].clone()); }
                }
                _ => {}
            }
            i += 1;
        }

        let raw = match file {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => { eprintln!("[slide-cli params] no se pudo leer {}: {}", path, e); std::process::exit(2); }
            },
            None => {
                use std::io::Read;
                let mut buf = String::new();
                if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                    eprintln!("[slide-cli params] stdin: {}", e);
                    std::process::exit(2);
                }
                buf
            }
        };
        let caller: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => { eprintln!("[slide-cli params] JSON inválido: {}", e); std::process::exit(2); }
        };

        let resolved = get_params(Some(&caller));
        match serde_json::to_string_pretty(&resolved) {
            Ok(out) => println!("{}", out),
            Err(e) => { eprintln!("[slide-cli params] serialización: {}", e); std::process::exit(3); }
        }
    } else if args.len() >= 2 && args[1] == "translate" {
        let mut lang: Option<String> = None;
        let mut file: Option<String> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--lang" => {
                    i += 1;
                    if i < args.len() { lang = Some(args[i].clone()); }
                }
                "--file" => {
                    i += 1;
                    if i < args.len() { file = Some(args[i].clone()); }
                }
                _ => {}
            }
            i += 1;
        }

        let mut page = match file {
            Some(path) => {
                let raw = match std::fs::read_to_string(&path) {
                    Ok(raw) => raw,
                    Err(e) => { eprintln!("[slide-cli translate] no se pudo leer {}: {}", path, e); std::process::exit(2); }
                };
                match serde_json::from_str::<Vec<PageNode>>(&raw) {
                    Ok(nodes) => Page::new(nodes),
                    Err(e) => { eprintln!("[slide-cli translate] página inválida: {}", e); std::process::exit(2); }
                }
            }
            // Página de muestra cuando no se pasa archivo
            None => Page::new(vec![
                PageNode::marked("t1", ""),
                PageNode::marked("t2", ""),
                PageNode::marked("t7", ""),
            ]),
        };

        let store = PreferenceStore::from_env();
        let applied = translate_page(&mut page, lang.as_deref(), &store);
        println!("idioma: {}", applied);
        match serde_json::to_string_pretty(&page.nodes) {
            Ok(out) => println!("{}", out),
            Err(e) => { eprintln!("[slide-cli translate] serialización: {}", e); std::process::exit(3); }
        }
    } else {
        eprintln!("uso: slide-cli params [--file <opciones.json>]");
        eprintln!("     slide-cli translate [--lang <idioma>] [--file <pagina.json>]");
        std::process::exit(1);
    }
}
