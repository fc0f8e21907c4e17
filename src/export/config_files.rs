//! Project scaffolding files shipped in the bundle.
//!
//! Which files are produced depends on the target framework: `tsconfig.json`
//! and `vite.config.js` are skipped for vanilla projects and `.babelrc` is
//! React-only.

use crate::export::GeneratedFile;
use crate::models::{deep_merge_json, TargetFramework};
use crate::wizard::WizardState;
use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Generates every config file applicable to the project's framework.
pub fn generate_config_files(state: &WizardState) -> Result<Vec<GeneratedFile>> {
    let framework = state.project.framework;
    let mut files = vec![
        GeneratedFile::new("package.json", package_json(state)?),
        GeneratedFile::new(".gitignore", GITIGNORE),
        GeneratedFile::new("postcss.config.js", POSTCSS_CONFIG),
        GeneratedFile::new(".eslintrc.json", eslint_config(framework)?),
        GeneratedFile::new(".prettierrc", pretty(&prettier_config())?),
    ];

    if framework != TargetFramework::Vanilla {
        files.push(GeneratedFile::new("tsconfig.json", tsconfig(framework)?));
        files.push(GeneratedFile::new("vite.config.js", vite_config(state)));
    }
    if framework == TargetFramework::React {
        files.push(GeneratedFile::new(".babelrc", pretty(&babel_config())?));
    }
    files.push(GeneratedFile::new(".github/workflows/ci-cd.yml", CI_WORKFLOW));

    Ok(files)
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize config file")
}

/// `package.json` with scripts and dev dependencies. React projects get the
/// runtime and Babel dependencies merged on top.
pub fn package_json(state: &WizardState) -> Result<String> {
    let project = &state.project;
    let mut package = json!({
        "name": project.slug(),
        "version": project.version,
        "description": project.description,
        "author": project.author,
        "license": "MIT",
        "main": "index.js",
        "scripts": {
            "build": "npm run build:css && npm run build:components",
            "build:css": "postcss src/styles/*.css -d dist/styles",
            "build:components": "babel src/components -d dist/components",
            "watch": "npm run build:css -- --watch",
            "serve": "http-server -p 8080"
        },
        "devDependencies": {
            "postcss": "^8.4.31",
            "postcss-cli": "^10.1.0",
            "autoprefixer": "^10.4.16",
            "http-server": "^14.1.1"
        }
    });

    if project.framework == TargetFramework::React {
        deep_merge_json(
            &mut package,
            &json!({
                "dependencies": {
                    "react": "^18.2.0",
                    "react-dom": "^18.2.0"
                },
                "devDependencies": {
                    "@babel/core": "^7.23.0",
                    "@babel/preset-react": "^7.22.0",
                    "@babel/cli": "^7.23.0"
                }
            }),
        );
    }

    pretty(&package).context("Failed to generate package.json")
}

fn eslint_config(framework: TargetFramework) -> Result<String> {
    let mut config = json!({
        "env": {
            "browser": true,
            "es2021": true,
            "node": true
        },
        "extends": ["eslint:recommended"],
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module"
        },
        "rules": {
            "indent": ["error", 2],
            "linebreak-style": ["error", "unix"],
            "quotes": ["error", "single"],
            "semi": ["error", "always"]
        }
    });

    let overlay = match framework {
        TargetFramework::React => Some((
            "plugin:react/recommended",
            json!({
                "plugins": ["react"],
                "parserOptions": { "ecmaFeatures": { "jsx": true } },
                "settings": { "react": { "version": "detect" } }
            }),
        )),
        TargetFramework::Vue => Some((
            "plugin:vue/vue3-recommended",
            json!({ "parser": "vue-eslint-parser" }),
        )),
        TargetFramework::Angular | TargetFramework::Vanilla => None,
    };

    if let Some((extend, overlay)) = overlay {
        // Arrays are replaced by deep merge, so extend in place.
        if let Some(extends) = config.get_mut("extends").and_then(Value::as_array_mut) {
            extends.push(Value::from(extend));
        }
        deep_merge_json(&mut config, &overlay);
    }

    pretty(&config).context("Failed to generate .eslintrc.json")
}

fn prettier_config() -> Value {
    json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": true,
        "printWidth": 100,
        "tabWidth": 2,
        "useTabs": false,
        "bracketSpacing": true,
        "arrowParens": "avoid",
        "endOfLine": "lf"
    })
}

fn babel_config() -> Value {
    json!({
        "presets": [
            "@babel/preset-react",
            ["@babel/preset-env", { "targets": { "node": "current" } }]
        ]
    })
}

fn tsconfig(framework: TargetFramework) -> Result<String> {
    let jsx = if framework == TargetFramework::React {
        "react-jsx"
    } else {
        "preserve"
    };

    pretty(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "node",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": jsx,
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "allowSyntheticDefaultImports": true,
            "esModuleInterop": true,
            "forceConsistentCasingInFileNames": true
        },
        "include": ["src"],
        "exclude": ["node_modules"]
    }))
}

fn vite_config(state: &WizardState) -> String {
    let (import, plugin, entry, external, globals) = match state.project.framework {
        TargetFramework::React => (
            "import react from '@vitejs/plugin-react';\n",
            "react()",
            "ts",
            "['react', 'react-dom']",
            "{ react: 'React', 'react-dom': 'ReactDOM' }",
        ),
        TargetFramework::Vue => (
            "import vue from '@vitejs/plugin-vue';\n",
            "vue()",
            "js",
            "['vue']",
            "{ vue: 'Vue' }",
        ),
        TargetFramework::Angular | TargetFramework::Vanilla => ("", "", "js", "[]", "{}"),
    };

    let mut library: String = state
        .project
        .name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if library.is_empty() {
        library.push_str("DesignSystem");
    }

    format!(
        "import {{ defineConfig }} from 'vite';
{import}
export default defineConfig({{
  plugins: [{plugin}],
  build: {{
    lib: {{
      entry: 'src/index.{entry}',
      name: '{library}',
      formats: ['es', 'umd']
    }},
    rollupOptions: {{
      external: {external},
      output: {{
        globals: {globals}
      }}
    }}
  }}
}});"
    )
}

const POSTCSS_CONFIG: &str = "module.exports = {
  plugins: [
    require('autoprefixer')
  ]
};";

const GITIGNORE: &str = "# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Build output
dist/
build/
*.log

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db

# Environment
.env
.env.local
.env.*.local

# Test coverage
coverage/
.nyc_output/

# Temporary files
*.tmp
*.temp
.cache/";

const CI_WORKFLOW: &str = "name: Design System CI/CD

on:
  push:
    branches: [ main, develop ]
  pull_request:
    branches: [ main ]

jobs:
  build:
    runs-on: ubuntu-latest

    strategy:
      matrix:
        node-version: [18.x, 20.x]

    steps:
    - uses: actions/checkout@v4

    - name: Use Node.js ${{ matrix.node-version }}
      uses: actions/setup-node@v4
      with:
        node-version: ${{ matrix.node-version }}

    - name: Install dependencies
      run: npm ci

    - name: Build design system
      run: npm run build

    - name: Upload artifacts
      uses: actions/upload-artifact@v4
      with:
        name: design-system-dist
        path: dist/
";
