//! Demonstration of the travel extraction pipeline
//!
//! Reads a sample user request, builds the structured travel request, and
//! runs the itinerary-side extractors over a canned itinerary document.

use travel_extraction::{
    extract_places_from_itinerary, parse_itinerary_to_days, Config, TravelRequest,
};

fn main() {
    tracing_subscriber::fmt::init();

    println!("🧳 Travel Extraction - Pipeline Demo");
    println!("====================================");

    let config = Config::default();
    let user_input = "I'm a foodie and cultural explorer planning a trip to Barcelona tomorrow";

    println!("\n📝 User input: {user_input}");

    let request = match TravelRequest::from_text(user_input, &config) {
        Some(request) => request,
        None => {
            println!("❌ No destination found in request");
            return;
        }
    };

    println!("📍 Destination:   {}", request.destination);
    println!("🎭 Personalities: {}", request.personalities.join(", "));
    println!("📅 Travel date:   {}", request.date_label());
    println!("🔎 Search query:  {}", request.search_query());

    let itinerary = "\
# Day 1
- Morning: Coffee and pastries at the Boqueria Market (4.7/5)
- Afternoon: Explore Casa Batlló, a local secret
- Evening: Dinner at **Quimet y Quimet**

# Day 2
- Morning: Visit the Sagrada Familia Cathedral (4.8/5)
- Afternoon: Stroll in the Gothic Quarter
- Evening: Eat at Bar Brutal";

    println!("\n🗓️  Parsed itinerary days:");
    let days = parse_itinerary_to_days(itinerary);
    for (day, block) in &days {
        let places = extract_places_from_itinerary(block);
        println!("  Day {day}: {} places -> {}", places.len(), places.join(", "));
    }

    println!("\n✅ Demo complete");
}
