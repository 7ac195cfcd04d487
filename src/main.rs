use bevy::app::AppExit;

fn main() -> AppExit {
    apple_stockpile::app().run()
}
