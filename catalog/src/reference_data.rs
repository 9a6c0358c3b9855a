//! Reference players and themes written by the seeder.

use serde_json::json;
use types::{NewPlayer, NewTheme, Position};

#[allow(clippy::too_many_arguments)]
fn player(
    name: &str,
    position: Position,
    club: &str,
    country: &str,
    rating: i32,
    image_url: &str,
    achievements: &[&str],
    era: &str,
    description: &str,
) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        position,
        club: club.to_string(),
        country: country.to_string(),
        rating,
        image_url: image_url.to_string(),
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
        era: era.to_string(),
        description: description.to_string(),
    }
}

pub fn reference_players() -> Vec<NewPlayer> {
    vec![
        player(
            "Lionel Messi",
            Position::RW,
            "PSG",
            "Argentina",
            95,
            "https://images.pexels.com/photos/32276071/pexels-photo-32276071/free-photo-of-soccer-player-on-field-ready-to-kick-ball.jpeg",
            &["8x Ballon d'Or", "World Cup 2022", "4x Champions League"],
            "2000s",
            "Considered by many as the greatest footballer of all time",
        ),
        player(
            "Cristiano Ronaldo",
            Position::ST,
            "Al-Nassr",
            "Portugal",
            94,
            "https://images.pexels.com/photos/32190745/pexels-photo-32190745/free-photo-of-professional-soccer-player-celebrating-goal.jpeg",
            &["5x Ballon d'Or", "5x Champions League", "Euro 2016"],
            "2000s",
            "One of the greatest goal scorers in football history",
        ),
        player(
            "Diego Maradona",
            Position::AM,
            "Napoli",
            "Argentina",
            96,
            "https://images.pexels.com/photos/32190729/pexels-photo-32190729/free-photo-of-soccer-player-prepares-for-throw-in-on-field.jpeg",
            &["World Cup 1986", "2x Serie A with Napoli"],
            "1980s",
            "The legendary Hand of God and Goal of the Century",
        ),
        player(
            "Pelé",
            Position::ST,
            "Santos",
            "Brazil",
            96,
            "https://images.unsplash.com/flagged/photo-1568105631375-d992b82a905b?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzh8MHwxfHNlYXJjaHwxfHxmb290YmFsbCUyMHBsYXllcnN8ZW58MHx8fHdoaXRlfDE3NDgzNjYxOTF8MA&ixlib=rb-4.1.0&q=85",
            &["3x World Cup", "1000+ goals"],
            "1960s",
            "The King of Football",
        ),
        player(
            "Ronaldinho",
            Position::AM,
            "Barcelona",
            "Brazil",
            92,
            "https://images.pexels.com/photos/28893176/pexels-photo-28893176/free-photo-of-professional-soccer-player-mid-action-on-field.jpeg",
            &["Ballon d'Or 2005", "Champions League 2006", "World Cup 2002"],
            "2000s",
            "The magician with the ball",
        ),
        player(
            "Paolo Maldini",
            Position::LB,
            "AC Milan",
            "Italy",
            93,
            "https://images.pexels.com/photos/31543184/pexels-photo-31543184/free-photo-of-soccer-player-celebrating-goal-on-field.jpeg",
            &["8x Champions League", "7x Serie A"],
            "1990s",
            "One of the greatest defenders of all time",
        ),
        player(
            "Franco Baresi",
            Position::CB,
            "AC Milan",
            "Italy",
            92,
            "https://images.pexels.com/photos/17583386/pexels-photo-17583386/free-photo-of-portrait-of-a-football-player.jpeg",
            &["3x Champions League", "6x Serie A"],
            "1980s",
            "Legendary sweeper and captain",
        ),
        player(
            "Gianluigi Buffon",
            Position::GK,
            "Juventus",
            "Italy",
            91,
            "https://images.pexels.com/photos/32157745/pexels-photo-32157745/free-photo-of-young-goalkeeper-preparing-for-action-on-field.jpeg",
            &["World Cup 2006", "10x Serie A"],
            "2000s",
            "One of the greatest goalkeepers ever",
        ),
        player(
            "Zinedine Zidane",
            Position::CM,
            "Real Madrid",
            "France",
            94,
            "https://images.pexels.com/photos/20814951/pexels-photo-20814951/free-photo-of-a-football-player-kicking-the-ball-during-a-match.jpeg",
            &["Ballon d'Or 1998", "World Cup 1998", "Euro 2000"],
            "1990s",
            "French maestro with incredible technique",
        ),
        player(
            "Ronaldo Nazário",
            Position::ST,
            "Real Madrid",
            "Brazil",
            93,
            "https://images.pexels.com/photos/32179245/pexels-photo-32179245/free-photo-of-football-player-on-field-during-match.jpeg",
            &["2x Ballon d'Or", "2x World Cup"],
            "1990s",
            "The Original Ronaldo, phenomenal striker",
        ),
        player(
            "Cafu",
            Position::RB,
            "AC Milan",
            "Brazil",
            90,
            "https://images.pexels.com/photos/32179174/pexels-photo-32179174/free-photo-of-exciting-football-match-with-dynamic-player-action.jpeg",
            &["2x World Cup", "Champions League 2007"],
            "1990s",
            "Legendary Brazilian right-back",
        ),
        player(
            "Xavi Hernández",
            Position::CM,
            "Barcelona",
            "Spain",
            91,
            "https://images.pexels.com/photos/29719236/pexels-photo-29719236/free-photo-of-dramatic-soccer-tackle-in-intense-match.jpeg",
            &["World Cup 2010", "Euro 2008, 2012", "4x Champions League"],
            "2000s",
            "Master of passing and ball control",
        ),
        player(
            "Andrés Iniesta",
            Position::AM,
            "Barcelona",
            "Spain",
            91,
            "https://images.pexels.com/photos/16355087/pexels-photo-16355087/free-photo-of-man-playing-soccer.jpeg",
            &["World Cup 2010", "Euro 2008, 2012", "4x Champions League"],
            "2000s",
            "Elegant playmaker with perfect technique",
        ),
        player(
            "Thierry Henry",
            Position::LW,
            "Arsenal",
            "France",
            91,
            "https://images.pexels.com/photos/27684711/pexels-photo-27684711/free-photo-of-a-young-man-in-soccer-gear-standing-in-front-of-a-field.jpeg",
            &["World Cup 1998", "Euro 2000", "Champions League 2009"],
            "2000s",
            "Arsenal legend and French striker",
        ),
        player(
            "Luka Modrić",
            Position::CM,
            "Real Madrid",
            "Croatia",
            90,
            "https://images.pexels.com/photos/32190747/pexels-photo-32190747/free-photo-of-dramatic-save-in-a-professional-football-match.jpeg",
            &["Ballon d'Or 2018", "5x Champions League", "World Cup Final 2018"],
            "2010s",
            "Croatian midfield maestro",
        ),
    ]
}

pub fn reference_themes() -> Vec<NewTheme> {
    let theme = |name: &str, description: &str, criteria: serde_json::Value| NewTheme {
        name: name.to_string(),
        description: description.to_string(),
        filter_criteria: serde_json::from_value(criteria).unwrap_or_default(),
        is_daily: false,
    };

    vec![
        theme(
            "Leyendas del FC Barcelona",
            "Arma tu once ideal con los mejores jugadores en la historia del Barcelona",
            json!({"club": "Barcelona"}),
        ),
        theme(
            "Campeones del Mundo",
            "Once ideal con jugadores que han ganado la Copa del Mundo",
            json!({}),
        ),
        theme(
            "La Era Dorada Brasileña",
            "Los mejores futbolistas brasileños de todos los tiempos",
            json!({"country": "Brazil"}),
        ),
    ]
}
