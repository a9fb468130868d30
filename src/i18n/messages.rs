//! Reply messages: usage hints, empty results, failures, confirmations.

pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    let (fr, en) = match key {
        // Usage
        "search_usage" => (
            "🔎 Veuillez entrer un nom d'anime à rechercher.\nExemple : /anime Naruto",
            "🔎 Please enter an anime title to search for.\nExample: /anime Naruto",
        ),
        "season_usage" => (
            "📅 Format : /saison <année> <saison>\nExemple : /saison 2023 fall",
            "📅 Format: /saison <year> <season>\nExample: /saison 2023 fall",
        ),
        "season_invalid" => (
            "📅 Saisons valides : spring, summer, fall, winter",
            "📅 Valid seasons: spring, summer, fall, winter",
        ),
        "character_usage" => (
            "👤 Veuillez entrer un nom de personnage à rechercher.\nExemple : /personnage Naruto",
            "👤 Please enter a character name to search for.\nExample: /personnage Naruto",
        ),

        // Nothing found
        "no_anime_found" => ("🚫 Aucun anime trouvé.", "🚫 No anime found."),
        "season_empty" => (
            "🚫 Aucun anime trouvé pour cette saison.",
            "🚫 No anime found for this season.",
        ),
        "no_character_found" => ("🚫 Aucun personnage trouvé.", "🚫 No character found."),
        "top_empty" => (
            "🚫 Impossible de récupérer le top des animes.",
            "🚫 Could not fetch the top anime.",
        ),
        "anime_not_found" => ("🚫 Anime introuvable.", "🚫 Anime not found."),
        "no_synopsis" => ("Aucun synopsis disponible.", "No synopsis available."),
        "no_trailer" => ("⚠️ Aucun trailer disponible.", "⚠️ No trailer available."),
        "no_about" => ("Aucune description disponible.", "No description available."),
        "no_release" => ("📅 Aucune sortie prévue.", "📅 No releases planned."),
        "characters_empty" => (
            "👥 Aucun personnage répertorié.",
            "👥 No characters listed.",
        ),
        "similar_empty" => (
            "🎯 Aucune recommandation pour cet anime.",
            "🎯 No recommendations for this anime.",
        ),
        "streaming_empty" => (
            "🌐 Aucun lien de streaming connu.",
            "🌐 No known streaming links.",
        ),
        "profile_empty_list" => ("_(vide)_", "_(empty)_"),

        // Failures
        "search_failed" => (
            "❌ Erreur lors de la recherche. Veuillez réessayer plus tard.",
            "❌ Search failed. Please try again later.",
        ),
        "season_failed" => (
            "❌ Erreur lors de la recherche par saison.",
            "❌ Season lookup failed.",
        ),
        "character_failed" => (
            "❌ Erreur lors de la recherche de personnage.",
            "❌ Character search failed.",
        ),
        "top_failed" => (
            "❌ Erreur lors de la récupération du top.",
            "❌ Could not fetch the top list.",
        ),
        "random_failed" => (
            "❌ Erreur lors de la sélection aléatoire.",
            "❌ Random pick failed.",
        ),
        "schedule_failed" => (
            "❌ Erreur lors de la récupération du planning.",
            "❌ Could not fetch the schedule.",
        ),
        "day_failed" => (
            "❌ Erreur lors de la récupération des sorties.",
            "❌ Could not fetch the releases.",
        ),
        "anime_failed" => (
            "❌ Erreur lors de la récupération de l'anime.",
            "❌ Could not fetch the anime.",
        ),
        "synopsis_failed" => (
            "❌ Erreur lors de la récupération du synopsis.",
            "❌ Could not fetch the synopsis.",
        ),
        "trailer_failed" => (
            "❌ Erreur lors de la récupération du trailer.",
            "❌ Could not fetch the trailer.",
        ),
        "characters_failed" => (
            "❌ Erreur lors de la récupération des personnages.",
            "❌ Could not fetch the characters.",
        ),
        "similar_failed" => (
            "❌ Erreur lors de la récupération des recommandations.",
            "❌ Could not fetch the recommendations.",
        ),
        "streaming_failed" => (
            "❌ Erreur lors de la récupération des liens de streaming.",
            "❌ Could not fetch the streaming links.",
        ),
        "fav_failed" => (
            "❌ Impossible d'ajouter aux favoris.",
            "❌ Could not add to favorites.",
        ),

        // Confirmations and headers
        "fav_added" => ("✅ Ajouté aux favoris !", "✅ Added to favorites!"),
        "fav_exists" => ("⚠️ Déjà dans les favoris.", "⚠️ Already in favorites."),
        "week_header" => (
            "📅 *Sorties de la semaine*\n\nCliquez sur un jour pour voir les animes du jour.",
            "📅 *This week's releases*\n\nTap a day to see what airs that day.",
        ),
        "profile_header" => ("👤 *Votre Profil*", "👤 *Your Profile*"),
        _ => return None,
    };
    Some(if lang == "fr" { fr } else { en })
}
