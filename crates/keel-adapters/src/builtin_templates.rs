//! Boilerplate that ships with Keel.
//!
//! Placeholders use the `{{VARIABLE}}` syntax understood by
//! `keel_core::domain::RenderContext`.

use keel_core::domain::Artifact;

/// Empty model schema.
pub const MODEL: &str = r#"/**
 * {{IDENTITY}}
 *
 * @module      :: Model
 * @description :: Schema for {{IDENTITY}} records.
 *
 * Generated by keel {{KEEL_VERSION}}
 */

module.exports = {

  attributes: {

  }

};
"#;

/// Empty controller.
pub const CONTROLLER: &str = r#"/**
 * {{IDENTITY}}
 *
 * @module      :: Controller
 * @description :: Request handlers for {{NAME_CAPITALIZED}}.
 *
 * Generated by keel {{KEEL_VERSION}}
 */

module.exports = {

};
"#;

/// Adapter skeleton exposing the collection lifecycle and CRUD hooks.
pub const ADAPTER: &str = r#"/**
 * {{IDENTITY}} adapter
 *
 * Generated by keel {{KEEL_VERSION}}
 */

module.exports = (function () {

  var collections = {};

  var adapter = {

    identity: '{{NAME}}',

    syncable: false,

    defaults: {},

    registerCollection: function (collection, cb) {
      collections[collection.identity] = collection;
      cb();
    },

    teardown: function (cb) {
      cb();
    },

    describe: function (collectionName, cb) {
      cb();
    },

    define: function (collectionName, definition, cb) {
      cb();
    },

    drop: function (collectionName, cb) {
      cb();
    },

    find: function (collectionName, options, cb) {
      cb();
    },

    create: function (collectionName, values, cb) {
      cb();
    },

    update: function (collectionName, options, values, cb) {
      cb();
    },

    destroy: function (collectionName, options, cb) {
      cb();
    }

  };

  return adapter;

})();
"#;

/// Boilerplate source for an artifact.
pub fn source(artifact: Artifact) -> &'static str {
    match artifact {
        Artifact::Model => MODEL,
        Artifact::Controller => CONTROLLER,
        Artifact::Adapter => ADAPTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_artifact_has_boilerplate() {
        for artifact in [Artifact::Model, Artifact::Controller, Artifact::Adapter] {
            assert!(source(artifact).contains("module.exports"), "{artifact}");
            assert!(source(artifact).contains("{{IDENTITY}}"), "{artifact}");
        }
    }

    #[test]
    fn adapter_identity_uses_raw_name() {
        assert!(ADAPTER.contains("identity: '{{NAME}}'"));
    }
}
