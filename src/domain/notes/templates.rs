//! Offline note templates.
//!
//! Static markdown skeletons keyed by note type and detail level. Only used
//! by the offline/demo provider; the normal path always calls the external
//! generation service.

use super::{DetailLevel, GenerationRequest, NoteType};

/// A known sample topic with the wording used to fill template placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTopic {
    pub name: &'static str,
    pub field: &'static str,
    pub explanation: &'static str,
}

/// Topics matching the prompt suggestions.
pub const SAMPLE_TOPICS: [SampleTopic; 6] = [
    SampleTopic {
        name: "Python basics",
        field: "programming",
        explanation: "creating applications and automating tasks using a simple, readable syntax",
    },
    SampleTopic {
        name: "Binary Search",
        field: "algorithms",
        explanation: "efficiently finding items in sorted datasets by repeatedly dividing the search space",
    },
    SampleTopic {
        name: "CNN architecture",
        field: "machine learning",
        explanation: "processing visual data through specialized neural network layers",
    },
    SampleTopic {
        name: "JavaScript promises",
        field: "web development",
        explanation: "handling asynchronous operations in a more manageable way",
    },
    SampleTopic {
        name: "SQL joins",
        field: "database management",
        explanation: "combining data from multiple tables based on related columns",
    },
    SampleTopic {
        name: "Graph theory",
        field: "discrete mathematics",
        explanation: "studying relationships between objects using vertices and edges",
    },
];

const DEFAULT_FIELD: &str = "its field";
const DEFAULT_EXPLANATION: &str = "its core ideas fit together";
const DEFAULT_CORE_CONCEPT: &str = "a small set of connected ideas";

/// Finds the sample topic mentioned in a prompt, ignoring case.
pub fn find_sample_topic(prompt: &str) -> Option<&'static SampleTopic> {
    let prompt = prompt.to_lowercase();
    SAMPLE_TOPICS
        .iter()
        .find(|topic| prompt.contains(&topic.name.to_lowercase()))
}

/// Returns the raw template for a selection.
pub fn template_for(note_type: NoteType, detail: DetailLevel) -> &'static str {
    match (note_type, detail) {
        (NoteType::Theory, DetailLevel::Concise) => THEORY_CONCISE,
        (NoteType::Theory, DetailLevel::Detailed) => THEORY_DETAILED,
        (NoteType::Code, DetailLevel::Concise) => CODE_CONCISE,
        (NoteType::Code, DetailLevel::Detailed) => CODE_DETAILED,
        (NoteType::Logic, DetailLevel::Concise) => LOGIC_CONCISE,
        (NoteType::Logic, DetailLevel::Detailed) => LOGIC_DETAILED,
    }
}

/// Renders the template for a request with every placeholder filled.
///
/// `{topic}` is the sample topic name when the prompt mentions one, else the
/// prompt itself. It is filled last so braces in the prompt stay literal.
pub fn render_template(request: &GenerationRequest) -> String {
    let sample = find_sample_topic(request.prompt());
    let topic = sample.map(|s| s.name).unwrap_or(request.prompt());
    let field = sample.map(|s| s.field).unwrap_or(DEFAULT_FIELD);
    let explanation = sample.map(|s| s.explanation).unwrap_or(DEFAULT_EXPLANATION);

    template_for(request.note_type(), request.detail())
        .replace("{field}", field)
        .replace("{brief_explanation}", explanation)
        .replace("{purpose}", explanation)
        .replace("{core_concept}", DEFAULT_CORE_CONCEPT)
        .replace("{topic}", topic)
}

const THEORY_CONCISE: &str = r#"# {topic} - Key Concepts

## Overview

{topic} is an important subject in {field}. Here are the key points:

- Point 1
- Point 2
- Point 3

## Summary

These concepts form the foundation of {topic}."#;

const THEORY_DETAILED: &str = r#"# {topic} - Comprehensive Notes

## Introduction

{topic} is a fundamental concept in {field} that helps us understand how {brief_explanation}.

## Key Concepts

### First Concept
Detailed explanation of the first important aspect...

### Second Concept
In-depth analysis of another critical component...

## Examples

Here are some practical examples:

1. Example one with explanation
2. Example two with explanation

## Applications

- Application 1
- Application 2
- Application 3

## Summary

{topic} represents an essential area of study with widespread implications for {field}."#;

const CODE_CONCISE: &str = r#"# {topic} - Code Reference

## Basic Implementation

```javascript
// Simple implementation
function example() {
  // Code here
  return result;
}
```

## Usage

```javascript
// How to use the code
const result = example();
```"#;

const CODE_DETAILED: &str = r#"# {topic} - Detailed Code Guide

## Introduction

{topic} is a programming concept used for {purpose}.

## Implementation

### Basic Structure

```javascript
// Detailed implementation
function complexExample(param1, param2) {
  // Step 1: Initialize variables
  let result = [];

  // Step 2: Process inputs
  for (const item of param1) {
    // Processing logic
    result.push(item * param2);
  }

  // Step 3: Return result
  return result;
}
```

### Advanced Usage

```javascript
// Complex example with error handling
try {
  const output = complexExample([1, 2, 3], 5);
  console.log(output);
} catch (error) {
  console.error('An error occurred:', error.message);
}
```

## Common Pitfalls

- Pitfall 1 and how to avoid it
- Pitfall 2 and best practices

## Optimization Tips

1. First optimization technique
2. Second optimization technique"#;

const LOGIC_CONCISE: &str = r#"# {topic} - Logical Framework

## Core Principle

The fundamental principle of {topic} is based on {core_concept}.

## Logical Steps

1. First step in the process
2. Second step in the process
3. Final step and conclusion

## Key Relationships

- Relationship 1 leads to Outcome A
- Relationship 2 creates Result B"#;

const LOGIC_DETAILED: &str = r#"# {topic} - Comprehensive Logical Analysis

## First Principles

{topic} can be understood by examining its foundational principles:

1. Primary axiom and its implications
2. Secondary principles derived from the primary axiom

## Logical Flow

### Initial Conditions
The starting point for understanding {topic} involves setting up these conditions...

### Transformation Process
Through a series of logical steps, we can see how these conditions evolve:

1. First transformation with explanation of logical necessity
2. Second transformation showing cause and effect
3. Third transformation demonstrating the pattern

### Resultant State
After the transformations, we arrive at the following conclusions...

## Visual Representation

```
Initial State -> Process 1 -> Intermediate State -> Process 2 -> Final State
```

## Practical Applications

1. First application scenario with logical analysis
2. Second application with step-by-step breakdown

## Common Misconceptions

- Misconception 1 and logical correction
- Misconception 2 and proper understanding"#;
