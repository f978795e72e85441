use axum::{extract::State, response::Html};

use crate::application::http::server::app_state::AppState;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>AI Рецепты</title>
<style>
body { font-family: sans-serif; max-width: 700px; margin: 2em auto; }
textarea, input { width: 100%; box-sizing: border-box; margin: 0.4em 0; }
button { padding: 0.5em 1.2em; }
#answer { white-space: pre-wrap; background: #f4f4f4; padding: 1em; border-radius: 4px; }
</style>
</head>
<body>
<h1>AI Рецепты</h1>
<p>Введите название блюда, AI сгенерирует рецепт и определит кухню</p>
<form id="ask-form">
  <input id="question" name="question" placeholder="Введите блюдо" required>
  <button type="submit">Спросить</button>
</form>
<h3 id="cuisine"></h3>
<div id="answer"></div>
<script>
document.getElementById('ask-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const question = document.getElementById('question').value;
  document.getElementById('cuisine').textContent = '...';
  document.getElementById('answer').textContent = '';
  const response = await fetch('{root_path}/ask', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ question }),
  });
  if (!response.ok) {
    document.getElementById('cuisine').textContent = 'Ошибка';
    document.getElementById('answer').textContent = await response.text();
    return;
  }
  const data = await response.json();
  document.getElementById('cuisine').textContent = 'Кухня: ' + data.cuisine;
  document.getElementById('answer').textContent = data.answer;
});
</script>
</body>
</html>"#;

/// Interactive form. Same contract against the pipeline as `POST /ask`.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(INDEX_HTML.replace("{root_path}", &state.args.server.root_path))
}
