use interaction_rust::config::{init_dotenv, CONFIG};
use interaction_rust::scenarios::{crop_growth_interaction, open_pest_diagnosis_interaction, pest_diagnosis_interaction};
use log::info;

fn print_json(label: &str, json: String, fingerprint: Option<String>) {
    println!("== {label}");
    println!("{json}");
    if let Some(fp) = fingerprint {
        println!("fingerprint: {fp}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Cargar .env antes de leer la configuración
    init_dotenv();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(CONFIG.log_filter.as_str())).try_init();
    info!("interaction demo (pretty={}, fingerprint={})", CONFIG.pretty, CONFIG.fingerprint);

    let crop = crop_growth_interaction()?;
    let crop_json = if CONFIG.pretty { crop.to_json_pretty()? } else { crop.to_json_string()? };
    print_json("crop growth (resolved)", crop_json, CONFIG.fingerprint.then(|| crop.fingerprint()));

    // Estado intermedio: misma interacción antes y después de resolver
    let open = open_pest_diagnosis_interaction()?;
    let open_json = if CONFIG.pretty { open.to_json_pretty()? } else { open.to_json_string()? };
    print_json("pest diagnosis (open)", open_json, CONFIG.fingerprint.then(|| open.fingerprint()));

    let pest = pest_diagnosis_interaction()?;
    let pest_json = if CONFIG.pretty { pest.to_json_pretty()? } else { pest.to_json_string()? };
    print_json("pest diagnosis (resolved)", pest_json, CONFIG.fingerprint.then(|| pest.fingerprint()));

    info!("demo finished");
    Ok(())
}
