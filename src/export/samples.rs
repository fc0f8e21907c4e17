//! HTML example pages linking the bundle stylesheets.

use crate::export::GeneratedFile;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <link rel="stylesheet" href="../styles/variables.css">
  <link rel="stylesheet" href="../styles/reset.css">
  <link rel="stylesheet" href="../styles/utilities.css">
  <link rel="stylesheet" href="../styles/components.css">
</head>"#;

/// Generates the three example pages.
pub fn generate_examples() -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("button-examples.html", page(BUTTON_BODY)),
        GeneratedFile::new("form-examples.html", page(FORM_BODY)),
        GeneratedFile::new("card-examples.html", page(CARD_BODY)),
    ]
}

fn page(body: &str) -> String {
    format!("{HEAD}\n{body}\n</html>")
}

const BUTTON_BODY: &str = r#"<body class="p-xl">
  <h1 class="text-3xl mb-lg">Button Examples</h1>

  <h2 class="text-xl mb-md">Primary Buttons</h2>
  <div class="mb-lg">
    <button class="btn btn-primary">Default</button>
    <button class="btn btn-primary" disabled>Disabled</button>
  </div>

  <h2 class="text-xl mb-md">Secondary Buttons</h2>
  <div class="mb-lg">
    <button class="btn btn-secondary">Default</button>
    <button class="btn btn-secondary" disabled>Disabled</button>
  </div>
</body>"#;

const FORM_BODY: &str = r#"<body class="p-xl">
  <h1 class="text-3xl mb-lg">Form Examples</h1>

  <form class="max-w-md">
    <div class="mb-md">
      <label class="block text-sm font-medium mb-xs">Email</label>
      <input type="email" class="input" placeholder="you@example.com">
    </div>

    <div class="mb-md">
      <label class="block text-sm font-medium mb-xs">Password</label>
      <input type="password" class="input" placeholder="••••••••">
    </div>

    <div class="mb-md">
      <label class="block text-sm font-medium mb-xs">Error State</label>
      <input type="text" class="input input-error" placeholder="This field has an error">
      <p class="text-sm text-error-600 mt-xs">Please fix this error</p>
    </div>

    <button type="submit" class="btn btn-primary">Submit</button>
  </form>
</body>"#;

const CARD_BODY: &str = r#"<body class="p-xl bg-neutral-100">
  <h1 class="text-3xl mb-lg">Card Examples</h1>

  <div class="grid grid-cols-3 gap-md">
    <div class="card">
      <div class="card-header">
        <h3 class="card-title">Basic Card</h3>
      </div>
      <div class="card-content">
        <p>This is a basic card with header and content.</p>
      </div>
    </div>

    <div class="card">
      <div class="card-header">
        <h3 class="card-title">Interactive Card</h3>
      </div>
      <div class="card-content">
        <p>Hover over this card to see the shadow effect.</p>
        <button class="btn btn-primary mt-md">Action</button>
      </div>
    </div>

    <div class="card">
      <div class="card-header">
        <h3 class="card-title">Card with List</h3>
      </div>
      <div class="card-content">
        <ul class="list-disc pl-md">
          <li>First item</li>
          <li>Second item</li>
          <li>Third item</li>
        </ul>
      </div>
    </div>
  </div>
</body>"#;
