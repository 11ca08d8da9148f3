//! Static pages.

pub fn render_home() -> String {
    "☁️ CloudCue\n\n\
     Weather-aware ideas for things to do.\n\n\
     Search a city:   cloudcue search <city>\n\
     Your favorites:  cloudcue favorites\n\
     How it works:    cloudcue guide"
        .to_string()
}

pub fn render_help() -> String {
    "❓ How CloudCue works\n\n\
     1. Search a city. CloudCue fetches a short forecast and finds places nearby.\n\
     2. Wet or likely-rainy days bring up indoor picks; dry days mix in parks and sights.\n\
     3. Each forecast comes with an outfit tip for today.\n\
     4. Narrow results with --tag <TAG> and save ones you like with --save <ID>.\n\
     5. Favorites are kept on this machine and shown with `cloudcue favorites`.\n\n\
     Commands:\n\
     \x20 search <city> [--tag TAG] [--save ID]...\n\
     \x20 favorites [--tag TAG]\n\
     \x20 favorites remove <ID>\n\
     \x20 open <route>      e.g. /activities?city=Vancouver, /favorites, /help\n\
     \x20 guide\n\n\
     API keys are read from the config file or the CLOUDCUE_WEATHER_API_KEY and\n\
     CLOUDCUE_GEOAPIFY_API_KEY environment variables."
        .to_string()
}
