//! Landing page rendering for the build output.

use minijinja::{context, Environment};

/// Context for rendering the `dist/index.html` landing page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Site title
    pub site_title: String,
    /// Number of blocks in the build
    pub blocks: usize,
    /// Number of templates in the build
    pub templates: usize,
    /// Build version string
    pub version: String,
    /// RFC 3339 build timestamp
    pub updated: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded landing page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render the landing page.
    pub fn render_index(&self, ctx: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            site_title => &ctx.site_title,
            blocks => ctx.blocks,
            templates => ctx.templates,
            total => ctx.blocks + ctx.templates,
            version => &ctx.version,
            updated => &ctx.updated,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
  <div class="container mx-auto px-4 py-8">
    <header class="text-center mb-12">
      <h1 class="text-4xl font-bold text-gray-900 mb-4">{{ site_title }}</h1>
      <p class="text-xl text-gray-600">Block and template repository with CLI tooling</p>
    </header>

    <div class="grid md:grid-cols-2 gap-6 mb-12">
      <div class="bg-white rounded-lg shadow-md p-6 border-l-4 border-green-500">
        <h3 class="text-lg font-semibold text-gray-800">Blocks</h3>
        <p class="text-3xl font-bold text-green-600">{{ blocks }}</p>
        <p class="text-sm text-gray-500">Reusable components</p>
      </div>
      <div class="bg-white rounded-lg shadow-md p-6 border-l-4 border-blue-500">
        <h3 class="text-lg font-semibold text-gray-800">Templates</h3>
        <p class="text-3xl font-bold text-blue-600">{{ templates }}</p>
        <p class="text-sm text-gray-500">Complete pages</p>
      </div>
    </div>

    <div class="bg-white rounded-lg shadow-md p-6 mb-8">
      <h2 class="text-2xl font-semibold text-gray-800 mb-4">API Endpoints</h2>
      <div class="grid md:grid-cols-2 gap-4">
        <div>
          <h3 class="font-semibold text-gray-700 mb-2">Collections</h3>
          <ul class="space-y-2">
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-blue-600">GET /api/blocks.json</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-blue-600">GET /api/templates.json</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-blue-600">GET /api/index.json</code></li>
          </ul>
        </div>
        <div>
          <h3 class="font-semibold text-gray-700 mb-2">Individual items</h3>
          <ul class="space-y-2">
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/blocks/{category}/{id}.json</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/blocks/{category}/{id}.html</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/blocks/{category}/{id}-preview.png</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/templates/{category}/{id}.json</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/templates/{category}/{id}.html</code></li>
            <li class="bg-gray-100 p-3 rounded"><code class="text-sm text-green-600">GET /api/templates/{category}/{id}-preview.png</code></li>
          </ul>
        </div>
      </div>
    </div>

    <div class="bg-white rounded-lg shadow-md p-6">
      <h2 class="text-xl font-semibold text-gray-800 mb-4">Build Information</h2>
      <div class="grid md:grid-cols-3 gap-4 text-sm">
        <div>
          <span class="font-medium text-gray-700">Last Updated:</span>
          <p class="text-gray-600">{{ updated }}</p>
        </div>
        <div>
          <span class="font-medium text-gray-700">Version:</span>
          <p class="text-gray-600">{{ version }}</p>
        </div>
        <div>
          <span class="font-medium text-gray-700">Total Items:</span>
          <p class="text-gray-600">{{ total }}</p>
        </div>
      </div>
    </div>
  </div>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counts_and_build_info() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_index(&IndexContext {
                site_title: "Blockforge".to_string(),
                blocks: 3,
                templates: 2,
                version: "1.0.0".to_string(),
                updated: "2025-06-01T12:00:00Z".to_string(),
            })
            .unwrap();

        assert!(html.contains("<title>Blockforge</title>"));
        assert!(html.contains(">3</p>"));
        assert!(html.contains(">2</p>"));
        assert!(html.contains(">5</p>"));
        assert!(html.contains("2025-06-01T12:00:00Z"));
    }

    #[test]
    fn lists_every_endpoint_shape() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_index(&IndexContext {
                site_title: "Blockforge".to_string(),
                blocks: 0,
                templates: 0,
                version: "1.0.0".to_string(),
                updated: "2025-06-01T12:00:00Z".to_string(),
            })
            .unwrap();

        assert!(html.contains("/api/blocks.json"));
        assert!(html.contains("/api/templates/{category}/{id}-preview.png"));
    }
}
