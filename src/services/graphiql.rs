//! GraphiQL page generation.
//!
//! The page loads React and GraphiQL from unpkg and mounts the IDE with a fetcher bound to
//! one endpoint. The fetcher contract the widget relies on:
//! - non-2xx: reject with `Error("HTTP error <status> - <body text>")`
//! - 2xx: resolve with the parsed JSON body
//!
//! Interpolated values come from the local operator (command line), not from requests, so
//! nothing is HTML-escaped. The endpoint is written as a JSON string literal, which is valid
//! JavaScript and contains the URL verbatim for http(s) endpoints: the parser turns `\` into
//! `/` and percent-encodes quotes and controls there. Only a non-special scheme can keep a
//! backslash, which then shows up JSON-escaped (`\\`) in the page.

/// Generate the HTML source of the GraphiQL page.
///
/// `auth_header_line` is inserted as-is into the fetch headers object; it is either empty
/// or a complete entry such as `'Authorization': 'Basic YWxpY2U6c2VjcmV0',`.
pub fn graphiql_source(graphql_endpoint_url: &str, auth_header_line: &str) -> String {
    let endpoint = serde_json::Value::from(graphql_endpoint_url).to_string();

    format!(
        r#"
<!DOCTYPE html>
<html>
  <head>
    <title>GraphiQL</title>
    <link href="https://unpkg.com/graphiql/graphiql.min.css" rel="stylesheet" />
  </head>
  <body>
    <div id="graphiql" style="height: 100vh;"></div>
    <script crossorigin src="https://unpkg.com/react/umd/react.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom/umd/react-dom.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/graphiql/graphiql.min.js"></script>
    <script>
      function graphQLFetcher(graphQLParams) {{
        return fetch({endpoint}, {{
          method: 'post',
          headers: {{
            'Accept': 'application/json',
            'Content-Type': 'application/json',
            {auth_header_line}
          }},
          body: JSON.stringify(graphQLParams),
          credentials: 'omit',
        }})
        .then(response => {{
          if (response.ok) {{
            return response.json();
          }}
          return response.text().then(bodyText => {{
            throw new Error(`HTTP error ${{response.status}} - ${{bodyText}}`);
          }});
        }});
      }}

      ReactDOM.render(
        React.createElement(GraphiQL, {{ fetcher: graphQLFetcher }}),
        document.getElementById('graphiql'),
      );
    </script>
  </body>
</html>
"#
    )
}
