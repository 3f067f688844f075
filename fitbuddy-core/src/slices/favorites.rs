use crate::models::Exercise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesAction {
    AddFavorite(Exercise),
    /// Removes every entry with this name.
    RemoveFavorite(String),
    /// Full replace, used during hydration.
    SetFavorites(Vec<Exercise>),
}

/// Favorite exercises, at most one per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub favorites: Vec<Exercise>,
}

impl FavoritesState {
    pub fn reduce(mut self, action: FavoritesAction) -> Self {
        match action {
            FavoritesAction::AddFavorite(exercise) => {
                if !self.is_favorite(&exercise.name) {
                    self.favorites.push(exercise);
                }
            }
            FavoritesAction::RemoveFavorite(name) => {
                self.favorites.retain(|fav| fav.name != name);
            }
            FavoritesAction::SetFavorites(favorites) => {
                self.favorites = favorites;
            }
        }
        self
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|fav| fav.name == name)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
