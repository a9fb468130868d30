//! Short labels: card fields, buttons, list names, seasons, command menu.

pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    let fr = lang == "fr";
    Some(match key {
        // --- Card fields ---
        "label_year" => {
            if fr {
                "📅 Année :"
            } else {
                "📅 Year:"
            }
        }
        "label_score" => {
            if fr {
                "⭐ Note :"
            } else {
                "⭐ Score:"
            }
        }
        "label_episodes" => {
            if fr {
                "📺 Épisodes :"
            } else {
                "📺 Episodes:"
            }
        }
        "label_status" => {
            if fr {
                "⏳ Statut :"
            } else {
                "⏳ Status:"
            }
        }
        "label_genres" => {
            if fr {
                "🎭 Genres :"
            } else {
                "🎭 Genres:"
            }
        }
        "label_studio" => {
            if fr {
                "🏢 Studio :"
            } else {
                "🏢 Studio:"
            }
        }
        "label_kanji" => {
            if fr {
                "🈶 Nom japonais :"
            } else {
                "🈶 Japanese name:"
            }
        }
        "label_member_favorites" => {
            if fr {
                "❤️ Favoris :"
            } else {
                "❤️ Favorites:"
            }
        }
        "unknown" => {
            if fr {
                "Inconnu"
            } else {
                "Unknown"
            }
        }
        "unknown_time" => {
            if fr {
                "Heure inconnue"
            } else {
                "Unknown time"
            }
        }

        // --- Buttons ---
        "btn_synopsis" => "📖 Synopsis",
        "btn_trailer" => "🎥 Trailer",
        "btn_characters" => {
            if fr {
                "👥 Personnages"
            } else {
                "👥 Characters"
            }
        }
        "btn_similar" => {
            if fr {
                "🎯 Similaires"
            } else {
                "🎯 Similar"
            }
        }
        "btn_streaming" => "🌐 Streaming",
        "btn_favorite" => {
            if fr {
                "❤️ Favoris"
            } else {
                "❤️ Favorite"
            }
        }
        "btn_week" => {
            if fr {
                "⬅️ Semaine"
            } else {
                "⬅️ Week"
            }
        }
        "btn_trailer_link" => {
            if fr {
                "▶️ Voir le trailer"
            } else {
                "▶️ Watch trailer"
            }
        }

        // --- Profile lists ---
        "list_favorites" => {
            if fr {
                "❤️ *Favoris*"
            } else {
                "❤️ *Favorites*"
            }
        }
        "list_watchlist" => {
            if fr {
                "📋 *À regarder*"
            } else {
                "📋 *Watchlist*"
            }
        }
        "list_completed" => {
            if fr {
                "✅ *Terminés*"
            } else {
                "✅ *Completed*"
            }
        }
        "list_dropped" => {
            if fr {
                "❌ *Abandonnés*"
            } else {
                "❌ *Dropped*"
            }
        }

        // --- Seasons ---
        "season_spring" => {
            if fr {
                "Printemps"
            } else {
                "Spring"
            }
        }
        "season_summer" => {
            if fr {
                "Été"
            } else {
                "Summer"
            }
        }
        "season_fall" => {
            if fr {
                "Automne"
            } else {
                "Fall"
            }
        }
        "season_winter" => {
            if fr {
                "Hiver"
            } else {
                "Winter"
            }
        }

        // --- Command menu ---
        "menu_anime" => {
            if fr {
                "Rechercher un anime"
            } else {
                "Search an anime"
            }
        }
        "menu_saison" => {
            if fr {
                "Animes d'une saison (année saison)"
            } else {
                "Anime of a season (year season)"
            }
        }
        "menu_personnage" => {
            if fr {
                "Rechercher un personnage"
            } else {
                "Search a character"
            }
        }
        "menu_top" => {
            if fr {
                "Top des animes"
            } else {
                "Top anime"
            }
        }
        "menu_random" => {
            if fr {
                "Anime au hasard"
            } else {
                "Random anime"
            }
        }
        "menu_planing" => {
            if fr {
                "Sorties de la semaine"
            } else {
                "This week's releases"
            }
        }
        "menu_profil" => {
            if fr {
                "Vos listes"
            } else {
                "Your lists"
            }
        }
        "menu_help" => {
            if fr {
                "Aide"
            } else {
                "Help"
            }
        }
        _ => return None,
    })
}
