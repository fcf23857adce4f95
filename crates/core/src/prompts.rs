//! Prompt builders for the generation API
//!
//! Both prompts are fixed natural-language instructions. Their wording is
//! load-bearing: changing either in a way that alters the response shape
//! requires bumping the matching prompt version tag in `config`.

/// Build the attraction-list prompt for a location.
///
/// Asks for exactly the top 10 attractions strictly within the city's
/// administrative boundary, with the entire response body being a JSON
/// array of `{ name, description }`.
pub fn search_prompt(location: &str) -> String {
    format!(
        r#"You are a friendly travel guide. List the top 10 must-visit places located strictly within the city limits of {location}.
Do NOT include nearby towns, suburbs, or satellite cities. If the location is Delhi, include only places within the National Capital Territory of Delhi; exclude Noida, Gurugram, Ghaziabad, Faridabad, Greater Noida, etc. If the input is a city, return only attractions inside that city's administrative boundary.

Return ONLY valid JSON with this exact shape (no extra text):
[
  {{ "name": string, "description": string }}
]

Guidance for descriptions:
- One or two sentences, conversational tone as if speaking to a traveler
- Avoid markdown, bullets, or emojis
- Keep it clear for text-to-speech (short sentences, natural phrasing)"#
    )
}

/// Build the long-form details prompt for a named place.
///
/// Requests a single speech-friendly passage of roughly 600-900 words with
/// no markdown, covering history, access, timing, nearby food and
/// attractions, a mini itinerary, and a closing line.
pub fn details_prompt(location: &str, name: &str) -> String {
    format!(
        r#"You are a warm, engaging tour guide. Create a flowing, spoken-style travel guide for "{name}" in {location}.

Constraints for text-to-speech:
- No markdown, no bullet lists, no emojis
- Use short to medium sentences (8-22 words each)
- Insert paragraph breaks every 3-5 sentences for natural pacing
- Conversational, friendly tone; avoid overly formal or robotic language

Depth and coverage requirements (we want all of this):
- Why it's famous and why travelers love it
- Historical significance: key eras and events that shaped it
- Architecture and standout features: style, materials, visual highlights
- Best time to visit: months/seasons, weather, crowds, lighting for photos
- Opening hours and entry fees if commonly known; otherwise advise to check official site
- How to get there: simple directions and approximate time from city center
- Facilities: parking, restrooms, accessibility, guided tours, on-site services
- What to see and do: main sightseeing highlights and signature experiences
- Estimated time to spend for a satisfying visit
- Insider tips: photo spots, etiquette, what to bring or wear, hidden gems
- Safety and etiquette notes: anything visitors should respect or watch out for
- Never-miss local foods nearby: name 3-5 iconic dishes and where to try them around the area
- Nearby attractions: mention 3-5 top spots with approximate distance or minutes away in parentheses
- A tiny sample itinerary suggestion that strings the visit with one or two nearby stops
- Accessibility notes if relevant (stairs, ramps, terrain)
- A few interesting facts or stories that make it memorable

Formatting:
- Do NOT use headers or lists; write in cohesive paragraphs.
- When naming nearby attractions or foods, weave them into sentences and separate with semicolons, including distance/time in parentheses where useful. Example: "The City Museum (10 minutes), Riverfront Gardens (15 minutes) ..."
- Target total length around 600-900 words.

End with a friendly closing line encouraging the traveler."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_prompt_names_location() {
        let prompt = search_prompt("Jaipur");
        assert!(prompt.contains("city limits of Jaipur"));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains(r#"{ "name": string, "description": string }"#));
    }

    #[test]
    fn test_search_prompt_excludes_satellite_cities() {
        let prompt = search_prompt("Delhi");
        assert!(prompt.contains("exclude Noida"));
        assert!(prompt.contains("administrative boundary"));
    }

    #[test]
    fn test_details_prompt_names_place_and_location() {
        let prompt = details_prompt("Agra", "Taj Mahal");
        assert!(prompt.contains(r#""Taj Mahal" in Agra"#));
        assert!(prompt.contains("600-900 words"));
        assert!(prompt.contains("No markdown"));
        assert!(prompt.contains("friendly closing line"));
    }
}
