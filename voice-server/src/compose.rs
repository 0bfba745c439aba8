//! Response composition.
//!
//! Turns a transit result list into the sentence the assistant speaks.
//! The primary path asks the hosted language model for a conversational
//! sentence in the session language; on any failure a fixed per-language
//! template interpolates the same fields. The fallback is a pure function:
//! identical inputs always produce identical output.

use crate::domain::{Language, TransitResult};
use crate::genai::TextGenerator;

/// The fixed "no route found" string for a language.
pub fn no_route_message(language: Language) -> &'static str {
    match language {
        Language::English => "Sorry, no bus routes found.",
        Language::Hindi => "माफ करें, कोई बस मार्ग नहीं मिला।",
        Language::Kannada => "ಕ್ಷಮಿಸಿ, ಯಾವುದೇ ಬಸ್ ಮಾರ್ಗ ಸಿಗಲಿಲ್ಲ.",
        Language::Tamil => "மன்னிக்கவும், பேருந்து வழி எதுவும் கிடைக்கவில்லை.",
        Language::Telugu => "క్షమించండి, బస్సు మార్గం ఏదీ కనబడలేదు.",
        Language::Malayalam => "ക്ഷമിക്കണം, ബസ് റൂട്ടുകളൊന്നും കണ്ടെത്തിയില്ല.",
    }
}

/// The fixed prompt string asking for both origin and destination.
pub fn incomplete_query_message(language: Language) -> &'static str {
    match language {
        Language::English => "Please mention both starting location and destination",
        Language::Hindi => "कृपया शुरुआती स्थान और गंतव्य दोनों बताएं",
        Language::Kannada => "ದಯವಿಟ್ಟು ಆರಂಭದ ಸ್ಥಳ ಮತ್ತು ಗಮ್ಯಸ್ಥಾನ ಎರಡನ್ನೂ ತಿಳಿಸಿ",
        Language::Tamil => "தயவுசெய்து தொடக்க இடம் மற்றும் சேருமிடம் இரண்டையும் கூறுங்கள்",
        Language::Telugu => "దయచేసి ప్రారంభ స్థలం మరియు గమ్యం రెండింటినీ చెప్పండి",
        Language::Malayalam => "ദയവായി ആരംഭ സ്ഥലവും ലക്ഷ്യസ്ഥാനവും രണ്ടും പറയുക",
    }
}

/// The fixed generic failure string for a language.
pub fn error_message(language: Language) -> &'static str {
    match language {
        Language::English => "Sorry, something went wrong. Please try again.",
        Language::Hindi => "माफ करें, कुछ गलत हुआ है। कृपया दोबारा कोशिश करें।",
        Language::Kannada => "ಕ್ಷಮಿಸಿ, ಏನೋ ತಪ್ಪಾಗಿದೆ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.",
        Language::Tamil => "மன்னிக்கவும், ஏதோ தவறு நடந்துவிட்டது. மீண்டும் முயற்சிக்கவும்.",
        Language::Telugu => "క్షమించండి, ఏదో తప్పు జరిగింది. దయచేసి మళ్లీ ప్రయత్నించండి.",
        Language::Malayalam => "ക്ഷമിക്കണം, എന്തോ കുഴപ്പം സംഭവിച്ചു. വീണ്ടും ശ്രമിക്കുക.",
    }
}

/// Render the fixed fallback sentence for a result.
///
/// Interpolates the bus number, stops, departure time, duration, and stop
/// count verbatim into the language's template.
pub fn fallback_sentence(result: &TransitResult, language: Language) -> String {
    let TransitResult {
        bus_number,
        from,
        to,
        departure_time,
        duration,
        stops,
    } = result;

    match language {
        Language::English => format!(
            "Bus number {bus_number} will arrive in {departure_time} from {from}. \
             It will take {duration} to reach {to} with {stops} stops."
        ),
        Language::Hindi => format!(
            "बस नंबर {bus_number} {departure_time} में {from} से छूटेगी। \
             {to} तक पहुंचने में {duration} लगेंगे। इस रूट में कुल {stops} स्टॉप हैं।"
        ),
        Language::Kannada => format!(
            "ಬಸ್ ಸಂಖ್ಯೆ {bus_number} {departure_time} ಸಮಯದಲ್ಲಿ {from} ಇಂದ ಹೊರಡುತ್ತದೆ. \
             {to} ತಲುಪಲು {duration} ಬೇಕಾಗುತ್ತದೆ. ಈ ಮಾರ್ಗದಲ್ಲಿ ಒಟ್ಟು {stops} ನಿಲ್ದಾಣಗಳಿವೆ."
        ),
        Language::Tamil => format!(
            "பேருந்து எண் {bus_number} {departure_time} இல் {from} இலிருந்து புறப்படும். \
             {to} சேர {duration} ஆகும். இந்த வழியில் மொத்தம் {stops} நிறுத்தங்கள் உள்ளன."
        ),
        Language::Telugu => format!(
            "బస్సు నంబర్ {bus_number} {departure_time} లో {from} నుండి బయలుదేరుతుంది. \
             {to} చేరడానికి {duration} పడుతుంది. ఈ మార్గంలో మొత్తం {stops} స్టాపులు ఉన్నాయి."
        ),
        Language::Malayalam => format!(
            "ബസ് നമ്പർ {bus_number} {departure_time} ൽ {from} നിന്ന് പുറപ്പെടും. \
             {to} എത്താൻ {duration} എടുക്കും. ഈ റൂട്ടിൽ ആകെ {stops} സ്റ്റോപ്പുകൾ ഉണ്ട്."
        ),
    }
}

/// Compose the spoken answer for a result list.
///
/// An empty list returns the language's "no route" string without touching
/// the network. Otherwise the first result is sent to the model; failures
/// and blank generations fall back to the fixed template.
pub async fn compose<G: TextGenerator>(
    generator: &G,
    results: &[TransitResult],
    language: Language,
) -> String {
    let Some(first) = results.first() else {
        return no_route_message(language).to_string();
    };

    match generator.generate(&composition_prompt(first, language)).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!("composition returned empty text, using template fallback");
            fallback_sentence(first, language)
        }
        Err(e) => {
            tracing::warn!(error = %e, "composition failed, using template fallback");
            fallback_sentence(first, language)
        }
    }
}

/// Build the composition prompt for the language model.
fn composition_prompt(result: &TransitResult, language: Language) -> String {
    format!(
        "Compose one short conversational sentence in {lang} telling a \
         passenger about this bus: bus number {bus}, departing from {from} \
         in {dep}, reaching {to} in {dur}, with {stops} stops. \
         Respond with the sentence only.",
        lang = language.english_name(),
        bus = result.bus_number,
        from = result.from,
        dep = result.departure_time,
        to = result.to,
        dur = result.duration,
        stops = result.stops,
    )
}
