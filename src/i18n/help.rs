//! Long texts: `/start` welcome and `/help` (HTML).

pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    match key {
        "welcome" => Some(match lang {
            "fr" => {
                "👋 Bonjour ! Je suis votre assistant pour découvrir des animes.\n\n\
                 ✨ Fonctionnalités :\n\
                 • 🔍 Recherche d'animes avec navigation interactive\n\
                 • 📝 Synopsis détaillés et traduits\n\
                 • 🎬 Liens vers les trailers officiels\n\
                 • 🎯 Recommandations d'animes similaires\n\
                 • 📅 Recherche par saison\n\
                 • 👤 Recherche de personnages\n\
                 • 🏆 Top animes\n\
                 • 🎲 Anime aléatoire\n\
                 • 📅 Planning des sorties (journalier)\n\
                 • ❤️ Système de favoris\n\
                 • 👥 Fonctionne dans les groupes et en privé\n\n\
                 📜 Utilise /help pour voir toutes les commandes !"
            }
            _ => {
                "👋 Hi! I'm your assistant for discovering anime.\n\n\
                 ✨ Features:\n\
                 • 🔍 Anime search with interactive navigation\n\
                 • 📝 Detailed, translated synopses\n\
                 • 🎬 Links to official trailers\n\
                 • 🎯 Similar anime recommendations\n\
                 • 📅 Search by season\n\
                 • 👤 Character search\n\
                 • 🏆 Top anime\n\
                 • 🎲 Random anime\n\
                 • 📅 Weekly release schedule\n\
                 • ❤️ Favorites\n\
                 • 👥 Works in groups and private chats\n\n\
                 📜 Use /help to see every command!"
            }
        }),
        "help" => Some(match lang {
            "fr" => {
                "🤖 <b>Aide - Bot Anime</b>\n\n\
                 🔍 <b>Recherche d'animes :</b>\n\
                 • <code>/anime &lt;nom&gt;</code>\n\n\
                 📅 <b>Recherche par saison :</b>\n\
                 • <code>/saison &lt;année&gt; &lt;saison&gt;</code> (spring, summer, fall, winter)\n\
                 • ex : <code>/saison 2023 fall</code>\n\n\
                 👤 <b>Recherche de personnages :</b>\n\
                 • <code>/personnage &lt;nom&gt;</code>\n\
                 • ex : <code>/personnage Naruto</code>\n\n\
                 🏆 <b>Top animes :</b>\n\
                 • <code>/top</code> - Liste des meilleurs animes du moment\n\n\
                 🎲 <b>Anime aléatoire :</b>\n\
                 • <code>/random</code> - Découvrir un anime au hasard\n\n\
                 📅 <b>Planning des sorties :</b>\n\
                 • <code>/planing</code> - Voir les sorties de la semaine\n\
                 • Cliquez sur un jour pour voir les animes du jour\n\n\
                 👤 <b>Profil utilisateur :</b>\n\
                 • <code>/profil</code> - Voir vos listes\n\n\
                 ❤️ <b>Favoris :</b>\n\
                 • Cliquez sur le bouton ❤️ Favoris sur une fiche anime\n\
                 • Consultez vos favoris via /profil\n\n\
                 🎯 <b>Navigation interactive :</b>\n\
                 • Synopsis, Trailer, Personnages, Similaires, Streaming\n\n\
                 👥 <b>Groupes :</b>\n\
                 • Mentionne-moi puis écris le nom de l'anime"
            }
            _ => {
                "🤖 <b>Help - Anime Bot</b>\n\n\
                 🔍 <b>Anime search:</b>\n\
                 • <code>/anime &lt;title&gt;</code>\n\n\
                 📅 <b>Search by season:</b>\n\
                 • <code>/saison &lt;year&gt; &lt;season&gt;</code> (spring, summer, fall, winter)\n\
                 • e.g. <code>/saison 2023 fall</code>\n\n\
                 👤 <b>Character search:</b>\n\
                 • <code>/personnage &lt;name&gt;</code>\n\
                 • e.g. <code>/personnage Naruto</code>\n\n\
                 🏆 <b>Top anime:</b>\n\
                 • <code>/top</code> - Current best-rated anime\n\n\
                 🎲 <b>Random anime:</b>\n\
                 • <code>/random</code> - Discover a random anime\n\n\
                 📅 <b>Release schedule:</b>\n\
                 • <code>/planing</code> - This week's releases\n\
                 • Tap a day to see what airs that day\n\n\
                 👤 <b>User profile:</b>\n\
                 • <code>/profil</code> - See your lists\n\n\
                 ❤️ <b>Favorites:</b>\n\
                 • Tap the ❤️ Favorite button on an anime card\n\
                 • See your favorites with /profil\n\n\
                 🎯 <b>Interactive navigation:</b>\n\
                 • Synopsis, Trailer, Characters, Similar, Streaming\n\n\
                 👥 <b>Groups:</b>\n\
                 • Mention me followed by the anime title"
            }
        }),
        _ => None,
    }
}
