//! Exercise catalog adapter.

use serde::Serialize;

use super::API_KEY_HEADER;
use crate::models::Exercise;

/// Filters understood by the catalog. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExerciseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ExerciseQuery {
    pub fn muscle(muscle: impl Into<String>) -> Self {
        Self {
            muscle: Some(muscle.into()),
            ..Default::default()
        }
    }

    pub fn difficulty(difficulty: impl Into<String>) -> Self {
        Self {
            difficulty: Some(difficulty.into()),
            ..Default::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Local equivalent of the remote filter: case-insensitive equality on
    /// muscle, difficulty and type, case-insensitive substring on name.
    /// `offset` does not filter.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        fn eq(filter: &Option<String>, value: &str) -> bool {
            filter
                .as_deref()
                .map_or(true, |f| f.to_lowercase() == value.to_lowercase())
        }

        eq(&self.muscle, &exercise.muscle)
            && eq(&self.difficulty, &exercise.difficulty)
            && eq(&self.exercise_type, &exercise.exercise_type)
            && self.name.as_deref().map_or(true, |n| {
                exercise.name.to_lowercase().contains(&n.to_lowercase())
            })
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ExerciseClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetches exercises matching `query`.
    ///
    /// Never fails: on any transport, status or decode error the fixed local
    /// dataset is filtered with the same query and returned instead.
    pub async fn get_exercises(&self, query: &ExerciseQuery) -> Vec<Exercise> {
        match self.fetch(query).await {
            Ok(exercises) => exercises,
            Err(e) => {
                tracing::warn!("Error fetching exercises, using local data: {}", e);
                fallback_exercises(query)
            }
        }
    }

    pub async fn by_muscle(&self, muscle: &str) -> Vec<Exercise> {
        self.get_exercises(&ExerciseQuery::muscle(muscle)).await
    }

    pub async fn by_difficulty(&self, difficulty: &str) -> Vec<Exercise> {
        self.get_exercises(&ExerciseQuery::difficulty(difficulty))
            .await
    }

    /// Looks up one exercise by name: an exact (case-insensitive) match wins,
    /// otherwise the first partial match.
    pub async fn find(&self, name: &str) -> Option<Exercise> {
        let mut results = self.get_exercises(&ExerciseQuery::name(name)).await;
        let exact = results
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name));
        match exact {
            Some(index) => Some(results.swap_remove(index)),
            None => results.into_iter().next(),
        }
    }

    async fn fetch(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, reqwest::Error> {
        let mut request = self.http.get(&self.base_url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        request.send().await?.error_for_status()?.json().await
    }
}

/// The built-in dataset filtered by `query`.
pub fn fallback_exercises(query: &ExerciseQuery) -> Vec<Exercise> {
    FALLBACK_EXERCISES
        .iter()
        .map(|(name, exercise_type, muscle, equipment, difficulty, instructions)| {
            Exercise::new(*name)
                .with_type(*exercise_type)
                .with_muscle(*muscle)
                .with_equipment(*equipment)
                .with_difficulty(*difficulty)
                .with_instructions(*instructions)
        })
        .filter(|exercise| query.matches(exercise))
        .collect()
}

/// (name, type, muscle, equipment, difficulty, instructions)
const FALLBACK_EXERCISES: [(&str, &str, &str, &str, &str, &str); 10] = [
    (
        "Push-ups",
        "strength",
        "chest",
        "body_only",
        "beginner",
        "Start in a plank position with your hands shoulder-width apart. Lower your body until your chest nearly touches the floor. Push yourself back up to the starting position.",
    ),
    (
        "Squats",
        "strength",
        "quadriceps",
        "body_only",
        "beginner",
        "Stand with feet hip-width apart. Bend your knees and lower your body as if sitting back into a chair. Keep your chest up and weight in your heels. Return to standing position.",
    ),
    (
        "Pull-ups",
        "strength",
        "lats",
        "pull-up bar",
        "intermediate",
        "Hang from a pull-up bar with hands slightly wider than shoulder-width. Pull yourself up until your chin clears the bar. Lower yourself back down with control.",
    ),
    (
        "Plank",
        "strength",
        "abdominals",
        "body_only",
        "beginner",
        "Start in a push-up position, then lower onto your forearms. Keep your body in a straight line from head to heels. Hold this position.",
    ),
    (
        "Lunges",
        "strength",
        "quadriceps",
        "body_only",
        "beginner",
        "Stand with feet hip-width apart. Step forward with one leg and lower your hips until both knees are bent at 90 degrees. Push back to starting position.",
    ),
    (
        "Deadlift",
        "strength",
        "lower_back",
        "barbell",
        "intermediate",
        "Stand with feet hip-width apart, barbell over mid-foot. Bend at hips and knees to grip the bar. Lift by extending hips and knees. Lower the bar by bending at the hips.",
    ),
    (
        "Bench Press",
        "strength",
        "chest",
        "barbell",
        "intermediate",
        "Lie on a bench with feet flat on the floor. Grip the barbell slightly wider than shoulder-width. Lower the bar to your chest, then press it back up.",
    ),
    (
        "Bicycle Crunches",
        "strength",
        "abdominals",
        "body_only",
        "beginner",
        "Lie on your back with hands behind your head. Bring opposite elbow to opposite knee while extending the other leg. Alternate sides in a pedaling motion.",
    ),
    (
        "Burpees",
        "cardio",
        "quadriceps",
        "body_only",
        "intermediate",
        "Start standing, drop into a squat with hands on ground. Kick feet back into plank. Do a push-up, jump feet to hands, and jump up with arms overhead.",
    ),
    (
        "Mountain Climbers",
        "cardio",
        "abdominals",
        "body_only",
        "intermediate",
        "Start in a plank position. Alternate bringing your knees toward your chest in a running motion. Keep your core engaged throughout.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{http_client, DEFAULT_TIMEOUT};
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn names(exercises: &[Exercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    fn client(server: &MockServer) -> ExerciseClient {
        ExerciseClient::new(
            http_client(DEFAULT_TIMEOUT),
            server.uri(),
            Some("test-key".to_string()),
        )
    }

    #[test]
    fn test_fallback_unfiltered_has_ten_entries() {
        assert_eq!(fallback_exercises(&ExerciseQuery::default()).len(), 10);
    }

    #[test]
    fn test_fallback_beginner_filter() {
        let beginner = fallback_exercises(&ExerciseQuery::difficulty("beginner"));
        assert_eq!(beginner.len(), 5);
        assert!(beginner.iter().all(|e| e.difficulty == "beginner"));

        let upper = fallback_exercises(&ExerciseQuery::difficulty("BEGINNER"));
        assert_eq!(upper, beginner);
    }

    #[test]
    fn test_fallback_combined_filters() {
        let query = ExerciseQuery {
            muscle: Some("Quadriceps".to_string()),
            exercise_type: Some("cardio".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&fallback_exercises(&query)), vec!["Burpees"]);
    }

    #[test]
    fn test_fallback_name_is_substring_match() {
        let query = ExerciseQuery::name("UP");
        assert_eq!(
            names(&fallback_exercises(&query)),
            vec!["Push-ups", "Pull-ups"]
        );
    }

    #[test]
    fn test_query_serializes_only_set_fields() {
        let query = ExerciseQuery {
            exercise_type: Some("cardio".to_string()),
            offset: Some(10),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"type": "cardio", "offset": 10}));
    }

    #[tokio::test]
    async fn test_get_exercises_returns_remote_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("muscle", "biceps"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "Hammer Curls",
                    "type": "strength",
                    "muscle": "biceps",
                    "equipment": "dumbbell",
                    "difficulty": "intermediate",
                    "instructions": "Curl."
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let exercises = client(&server).by_muscle("biceps").await;

        assert_eq!(names(&exercises), vec!["Hammer Curls"]);
    }

    #[tokio::test]
    async fn test_get_exercises_falls_back_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let exercises = client(&server).by_difficulty("beginner").await;

        assert_eq!(exercises, fallback_exercises(&ExerciseQuery::difficulty("beginner")));
    }

    #[tokio::test]
    async fn test_get_exercises_falls_back_on_bad_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let exercises = client(&server).by_muscle("chest").await;

        assert_eq!(names(&exercises), vec!["Push-ups", "Bench Press"]);
    }

    #[tokio::test]
    async fn test_find_prefers_exact_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let client = client(&server);

        let plank = client.find("plank").await.unwrap();
        assert_eq!(plank.name, "Plank");

        let partial = client.find("climb").await.unwrap();
        assert_eq!(partial.name, "Mountain Climbers");

        assert!(client.find("zumba").await.is_none());
    }
}
