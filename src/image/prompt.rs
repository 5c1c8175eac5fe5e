pub const DEFAULT_COUNTRY: &str = "Perú";

const PROMPT_PREFIX: &str =
    "Genera una ilustración moderna y profesional relacionada con el siguiente tema: ";
const PROMPT_SUBJECT: &str = ". La imagen debe representar el sector tecnológico y minero del país especificado, con estilo digital moderno, elementos de inteligencia artificial, sensores, automatización, datos y maquinaria minera";

/// Builds the illustration prompt sent to the image model. With
/// `include_map` the prompt also asks for a map of `country`.
pub fn build_image_prompt(prompt: &str, include_map: bool, country: &str) -> String {
    let mut image_prompt = format!("{PROMPT_PREFIX}{prompt}{PROMPT_SUBJECT}");

    if include_map {
        image_prompt.push_str(", e incluir un mapa de ");
        image_prompt.push_str(country);
        image_prompt.push('.');
    } else {
        image_prompt.push('.');
    }

    image_prompt
}
